//! Exemption policy and grant models.
//!
//! An [`ExemptionType`] is a reusable policy definition; an [`ExemptionGrant`]
//! applies one to a faculty member for a span of years. Grants carry a
//! materialized snapshot of their policy so the engine never needs to look
//! anything up.

use serde::{Deserialize, Serialize};

/// A reusable exemption policy definition.
///
/// Invariant: when `grants_full_exemption` is true, the reduction magnitudes
/// are ignored by convention (full exemption takes precedence). Both can
/// legally be populated; the engine emits a warning when they are.
///
/// # Examples
///
/// ```
/// use qualification_engine::models::ExemptionType;
///
/// let new_phd = ExemptionType {
///     id: 1,
///     name: "New doctorate".to_string(),
///     description: None,
///     reduces_ic_requirement: false,
///     reduces_prj_requirement: false,
///     reduces_activity_requirement: false,
///     grants_full_exemption: true,
///     ic_reduction: 0,
///     prj_reduction: 0,
///     activity_reduction: 0,
///     years_after_degree: Some(3),
///     grace_period_years: 0,
/// };
/// assert!(new_phd.grants_full_exemption);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionType {
    /// Unique identifier for the policy.
    pub id: u32,
    /// The policy name (e.g., "Programme Leader", "New doctorate").
    pub name: String,
    /// Free-text description of the policy.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether this policy lowers the total-IC requirement.
    #[serde(default)]
    pub reduces_ic_requirement: bool,
    /// Whether this policy lowers the PRJ-article requirement.
    #[serde(default)]
    pub reduces_prj_requirement: bool,
    /// Whether this policy lowers the activity requirement.
    #[serde(default)]
    pub reduces_activity_requirement: bool,
    /// Whether this policy waives all numeric requirements outright.
    #[serde(default)]
    pub grants_full_exemption: bool,
    /// How much to lower the total-IC requirement.
    #[serde(default)]
    pub ic_reduction: u32,
    /// How much to lower the PRJ-article requirement.
    #[serde(default)]
    pub prj_reduction: u32,
    /// How much to lower the activity requirement.
    #[serde(default)]
    pub activity_reduction: u32,
    /// Caps a degree-anchored full exemption's duration, counted from the
    /// year the highest degree was conferred.
    #[serde(default)]
    pub years_after_degree: Option<u32>,
    /// Extra years after a grant's nominal end during which its effect
    /// still applies.
    #[serde(default)]
    pub grace_period_years: u32,
}

impl ExemptionType {
    /// Returns true if reduction magnitudes are set on a full-exemption
    /// policy, where they are ignored by convention.
    pub fn has_ignored_reductions(&self) -> bool {
        self.grants_full_exemption
            && (self.ic_reduction > 0 || self.prj_reduction > 0 || self.activity_reduction > 0)
    }
}

/// Applies an exemption policy to a faculty member over a span of years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionGrant {
    /// Unique identifier for the grant. Grant ids are the deterministic
    /// tie-break when multiple full exemptions could apply: lowest id wins.
    pub id: u32,
    /// Snapshot of the exemption policy this grant applies.
    pub exemption_type: ExemptionType,
    /// First year of the exemption (inclusive).
    pub year_from: i32,
    /// Last year of the exemption (inclusive), or `None` while the faculty
    /// member is still serving in the exempting capacity.
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Free-text notes recorded by the approver.
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExemptionGrant {
    /// Returns the last year this grant has effect, including any grace
    /// period, or `None` while the grant is ongoing.
    pub fn effective_end(&self) -> Option<i32> {
        self.year_to
            .map(|end| end + self.exemption_type.grace_period_years as i32)
    }

    /// Returns true if the grant has no recorded end year.
    pub fn is_ongoing(&self) -> bool {
        self.year_to.is_none()
    }
}
