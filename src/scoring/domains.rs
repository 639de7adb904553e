use serde::{Deserialize, Serialize};

use super::validation::validate_catalog;

/// A named category of developmental skills with its ordered checklist items.
///
/// Example YAML:
/// ```yaml
/// name: Motor Skills
/// items:
///   - Grasps small objects
///   - Draws straight lines
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DomainDefinition {
    pub name: String,
    pub items: Vec<String>,
}

impl DomainDefinition {
    pub fn new(name: &str, items: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            items: items.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Position of a domain within its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DomainId(pub usize);

/// The immutable set of domains an assessment is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCatalog {
    domains: Vec<DomainDefinition>,
}

impl DomainCatalog {
    /// The five built-in domains, three items each
    pub fn builtin() -> Self {
        Self {
            domains: builtin_domains(),
        }
    }

    /// Build a catalog from user-supplied definitions.
    /// Returns every validation error at once.
    pub fn from_definitions(domains: Vec<DomainDefinition>) -> Result<Self, Vec<String>> {
        validate_catalog(&domains)?;
        Ok(Self { domains })
    }

    pub fn domains(&self) -> &[DomainDefinition] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn get(&self, id: DomainId) -> Option<&DomainDefinition> {
        self.domains.get(id.0)
    }

    /// Iterate domains together with their ids, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (DomainId, &DomainDefinition)> {
        self.domains
            .iter()
            .enumerate()
            .map(|(i, d)| (DomainId(i), d))
    }

    /// Find a domain by name (case-insensitive, surrounding whitespace ignored)
    pub fn find(&self, name: &str) -> Option<DomainId> {
        let name = name.trim();
        self.domains
            .iter()
            .position(|d| d.name.eq_ignore_ascii_case(name))
            .map(DomainId)
    }

    /// Total number of items across all domains
    pub fn item_count(&self) -> usize {
        self.domains.iter().map(DomainDefinition::item_count).sum()
    }
}

impl Default for DomainCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_domains() -> Vec<DomainDefinition> {
    vec![
        DomainDefinition::new(
            "Receptive Language",
            &[
                "Follows 1-step instructions",
                "Identifies common objects",
                "Points to named body parts",
            ],
        ),
        DomainDefinition::new(
            "Expressive Language",
            &[
                "Uses 2-word phrases",
                "Names familiar people",
                "Asks basic questions",
            ],
        ),
        DomainDefinition::new(
            "Motor Skills",
            &[
                "Grasps small objects",
                "Draws straight lines",
                "Jumps with both feet",
            ],
        ),
        DomainDefinition::new(
            "Social Interaction",
            &[
                "Responds to name",
                "Engages in turn-taking",
                "Initiates play with peers",
            ],
        ),
        DomainDefinition::new(
            "Daily Living Skills",
            &[
                "Feeds self with spoon",
                "Puts on shoes",
                "Brushes teeth with help",
            ],
        ),
    ]
}
