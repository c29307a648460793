//! Policy configuration loading for the Faculty Qualification Evaluation Engine.
//!
//! This module provides functionality to load accreditation policy
//! configuration from YAML files, including standard metadata, per-category
//! base requirements, and rolling-window settings.
//!
//! # Example
//!
//! ```no_run
//! use qualification_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/standards2020").unwrap();
//! println!("Loaded standard: {}", policy.policy().name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{CategoryRequirement, PolicyMetadata, RequirementsConfig, WindowSettings};
