use serde::{Deserialize, Serialize};

use crate::scoring::{DomainCatalog, DomainDefinition};

/// Top-level config file.
///
/// Example YAML:
/// ```yaml
/// theme: dark
/// domains:
///   - name: Motor Skills
///     items: ["Grasps small objects", "Draws straight lines"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Color palette for the TUI (default: auto)
    #[serde(default)]
    pub theme: ThemeMode,

    /// Replacement domain catalog. When absent the built-in domains are used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<DomainDefinition>>,
}

impl Config {
    /// Config written by `init`: the built-in catalog spelled out so it can be edited
    pub fn starter() -> Self {
        Self {
            theme: ThemeMode::Auto,
            domains: Some(DomainCatalog::builtin().domains().to_vec()),
        }
    }

    /// Resolve the catalog to score against, validating custom domains
    pub fn catalog(&self) -> Result<DomainCatalog, Vec<String>> {
        match &self.domains {
            Some(domains) => DomainCatalog::from_definitions(domains.clone()),
            None => Ok(DomainCatalog::builtin()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Detect from terminal background luminance
    #[default]
    Auto,
    Dark,
    Light,
}
