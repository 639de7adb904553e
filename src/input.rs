use anyhow::{bail, Context, Result};

use crate::scoring::{DomainCatalog, DomainId, ScoreKey};

/// Parse a `DOMAIN:ITEM=VALUE` score assignment from the command line.
///
/// DOMAIN is a domain name (case-insensitive) or its 1-based number and ITEM
/// is the 1-based item number, matching the `domains` listing. VALUE is
/// returned unchecked so the calculator can report out-of-range scores.
pub fn parse_assignment(catalog: &DomainCatalog, s: &str) -> Result<(ScoreKey, i64)> {
    let (target, value) = s
        .rsplit_once('=')
        .with_context(|| format!("Expected DOMAIN:ITEM=VALUE, got '{}'", s))?;
    let (domain, item) = target
        .rsplit_once(':')
        .with_context(|| format!("Expected DOMAIN:ITEM=VALUE, got '{}'", s))?;

    let domain = resolve_domain(catalog, domain)?;
    let item = parse_position(item).with_context(|| format!("Invalid item number in '{}'", s))?;
    let value: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid score '{}' in '{}'", value.trim(), s))?;

    Ok((ScoreKey::new(domain, item), value))
}

fn resolve_domain(catalog: &DomainCatalog, s: &str) -> Result<DomainId> {
    match parse_position(s) {
        Ok(position) if position < catalog.len() => Ok(DomainId(position)),
        // A custom catalog may name a domain "2024"
        Ok(position) => catalog.find(s).with_context(|| {
            format!(
                "Domain number {} is out of range (1-{})",
                position + 1,
                catalog.len()
            )
        }),
        Err(_) => catalog
            .find(s)
            .with_context(|| format!("Unknown domain '{}'", s.trim())),
    }
}

/// 1-based number to 0-based index
fn parse_position(s: &str) -> Result<usize> {
    let n: usize = s.trim().parse()?;
    if n == 0 {
        bail!("numbers start at 1");
    }
    Ok(n - 1)
}
