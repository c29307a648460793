//! Faculty profile model and related types.
//!
//! This module defines the FacultyProfile struct and FacultyCategory enum
//! for representing faculty members in the qualification evaluation system.

use serde::{Deserialize, Serialize};

/// The qualification category a faculty member is evaluated under.
///
/// Categories are mutually exclusive evaluation tracks. `Sa` and `Sp` are
/// scholarship tracks counted in intellectual contributions; `Pa` and `Ip`
/// are practice tracks counted in professional engagement activities.
/// `Other` carries no requirements and is never evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacultyCategory {
    /// Scholarly Academic.
    Sa,
    /// Practice Academic.
    Pa,
    /// Scholarly Practitioner.
    Sp,
    /// Instructional Practitioner.
    Ip,
    /// Uncategorized or support staff; no requirements apply.
    Other,
}

impl FacultyCategory {
    /// Returns the lowercase code used in configuration files and JSON.
    pub fn code(&self) -> &'static str {
        match self {
            FacultyCategory::Sa => "sa",
            FacultyCategory::Pa => "pa",
            FacultyCategory::Sp => "sp",
            FacultyCategory::Ip => "ip",
            FacultyCategory::Other => "other",
        }
    }

    /// Returns true if this category is counted in intellectual contributions
    /// (total ICs and peer-reviewed journal articles).
    pub fn uses_contribution_counts(&self) -> bool {
        matches!(self, FacultyCategory::Sa | FacultyCategory::Sp)
    }

    /// Returns true if this category is counted in professional engagement
    /// activities.
    pub fn uses_activity_counts(&self) -> bool {
        matches!(self, FacultyCategory::Pa | FacultyCategory::Ip)
    }
}

/// Represents a faculty member subject to qualification evaluation.
///
/// # Examples
///
/// ```
/// use qualification_engine::models::{FacultyCategory, FacultyProfile};
///
/// let profile = FacultyProfile {
///     id: "fac_001".to_string(),
///     name: "Kari Nordmann".to_string(),
///     category: Some(FacultyCategory::Sa),
///     degree_year: Some(2015),
/// };
/// assert!(profile.category.unwrap().uses_contribution_counts());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyProfile {
    /// Unique identifier for the faculty member.
    pub id: String,
    /// The faculty member's display name.
    pub name: String,
    /// The qualification category, or `None` if never categorized.
    /// An uncategorized profile is treated like `Other`: not evaluated.
    #[serde(default)]
    pub category: Option<FacultyCategory>,
    /// The year the faculty member's highest degree was conferred, if known.
    /// A missing degree year disables degree-anchored full exemptions.
    #[serde(default)]
    pub degree_year: Option<i32>,
}

impl FacultyProfile {
    /// Returns true if this profile is subject to numeric evaluation.
    ///
    /// Profiles with no category or category `Other` short-circuit to a
    /// "not evaluated" result.
    pub fn is_evaluated(&self) -> bool {
        !matches!(self.category, None | Some(FacultyCategory::Other))
    }
}
