use std::collections::HashSet;

use super::domains::DomainDefinition;

/// Validate a domain catalog before it is used for scoring.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(domains: &[DomainDefinition]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if domains.is_empty() {
        errors.push("domains: at least one domain is required".to_string());
    }

    let mut seen = HashSet::new();
    for (i, domain) in domains.iter().enumerate() {
        let name = domain.name.trim();
        if name.is_empty() {
            errors.push(format!("domains[{}].name: must not be empty", i));
        } else if !seen.insert(name.to_lowercase()) {
            errors.push(format!("domains[{}].name: duplicate domain '{}'", i, name));
        }

        if domain.items.is_empty() {
            errors.push(format!("domains[{}].items: at least one item is required", i));
        }
        for (j, item) in domain.items.iter().enumerate() {
            if item.trim().is_empty() {
                errors.push(format!("domains[{}].items[{}]: must not be empty", i, j));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::DomainCatalog;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(validate_catalog(DomainCatalog::builtin().domains()).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let errors = validate_catalog(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at least one domain"));
    }

    #[test]
    fn test_domain_without_items() {
        let errors = validate_catalog(&[DomainDefinition::new("Play", &[])]).unwrap_err();
        assert!(errors[0].contains("domains[0].items"));
    }

    #[test]
    fn test_duplicate_names_case_insensitive() {
        let errors = validate_catalog(&[
            DomainDefinition::new("Play", &["Shares toys"]),
            DomainDefinition::new("play", &["Pretend play"]),
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("domains[1].name: duplicate"));
    }

    #[test]
    fn test_collects_all_errors() {
        let errors = validate_catalog(&[
            DomainDefinition::new(" ", &["Shares toys"]), // Error 1
            DomainDefinition::new("Play", &[""]),         // Error 2
            DomainDefinition::new("Self-care", &[]),      // Error 3
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
