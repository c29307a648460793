//! Configuration types for qualification policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::HashMap;

/// Metadata about the accreditation standard in force.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The standard code (e.g., "STD2020-3").
    pub code: String,
    /// The human-readable name of the standard.
    pub name: String,
    /// The version or effective date of the standard.
    pub version: String,
    /// URL to the official standard documentation.
    pub source_url: String,
}

/// Base requirements for one faculty category, before any reduction.
///
/// Only the dimensions relevant to the category's track are set in the
/// configuration file; the rest default to zero and are never consulted.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CategoryRequirement {
    /// Base total intellectual contributions required.
    #[serde(default)]
    pub ic_total: u32,
    /// Base peer-reviewed journal articles required.
    #[serde(default)]
    pub prj_articles: u32,
    /// Base professional engagement activities required.
    #[serde(default)]
    pub activities: u32,
}

/// Rolling-window settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowSettings {
    /// The fixed window width in years, inclusive on both ends.
    pub window_years: u32,
    /// How many years beyond the reference year (and latest recorded year)
    /// the timeline projects, and how far back of the reference year window
    /// ends start.
    pub horizon_years: u32,
}

/// Requirements configuration from requirements.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct RequirementsConfig {
    /// Rolling-window settings.
    pub window: WindowSettings,
    /// Map of category code (e.g., "sa") to base requirements.
    pub categories: HashMap<String, CategoryRequirement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_requirement_fields_default_to_zero() {
        let requirement: CategoryRequirement = serde_yaml::from_str("ic_total: 6").unwrap();
        assert_eq!(requirement.ic_total, 6);
        assert_eq!(requirement.prj_articles, 0);
        assert_eq!(requirement.activities, 0);
    }

    #[test]
    fn test_deserialize_requirements_config() {
        let yaml = r#"
window:
  window_years: 6
  horizon_years: 2
categories:
  sa:
    ic_total: 6
    prj_articles: 3
  pa:
    activities: 6
"#;
        let config: RequirementsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.window.window_years, 6);
        assert_eq!(config.categories["sa"].prj_articles, 3);
        assert_eq!(config.categories["pa"].activities, 6);
    }
}
