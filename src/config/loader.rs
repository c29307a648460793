//! Policy configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading accreditation
//! policy configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::FacultyCategory;

use super::types::{CategoryRequirement, PolicyMetadata, RequirementsConfig};

/// Loads and provides access to qualification policy configuration.
///
/// The `PolicyLoader` reads YAML configuration files from a directory and
/// provides methods to query per-category base requirements and window
/// settings.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/standards2020/
/// ├── policy.yaml        # Standard metadata
/// └── requirements.yaml  # Per-category base requirements + window settings
/// ```
///
/// # Example
///
/// ```no_run
/// use qualification_engine::config::PolicyLoader;
/// use qualification_engine::models::FacultyCategory;
///
/// let loader = PolicyLoader::load("./config/standards2020").unwrap();
///
/// let sa = loader.base_requirements(FacultyCategory::Sa).unwrap();
/// println!("SA base: {} ICs, {} PRJ articles", sa.ic_total, sa.prj_articles);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    metadata: PolicyMetadata,
    requirements: RequirementsConfig,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory
    ///   (e.g., "./config/standards2020")
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let requirements = Self::load_yaml::<RequirementsConfig>(&path.join("requirements.yaml"))?;

        Ok(Self {
            metadata,
            requirements,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the standard metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the full requirements configuration.
    pub fn requirements(&self) -> &RequirementsConfig {
        &self.requirements
    }

    /// Gets the base requirements for a faculty category.
    ///
    /// # Returns
    ///
    /// Returns the base requirements if the category is configured, or
    /// `CategoryNotConfigured`. `Other` is never looked up by the engine;
    /// asking for it here is also an error.
    pub fn base_requirements(
        &self,
        category: FacultyCategory,
    ) -> EngineResult<&CategoryRequirement> {
        self.requirements
            .categories
            .get(category.code())
            .ok_or_else(|| EngineError::CategoryNotConfigured {
                category: category.code().to_string(),
            })
    }
}
