//! Request types for the Faculty Qualification Evaluation Engine API.
//!
//! This module defines the JSON request structures for the `/evaluate` and
//! `/timeline` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{
    Activity, Contribution, EvaluationWindow, ExemptionGrant, ExemptionType, FacultyCategory,
    FacultyProfile, PublicationType,
};

/// Request body for the `/evaluate` endpoint.
///
/// Contains the fully materialized snapshot needed to evaluate one faculty
/// member's qualification status for one window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The faculty member being evaluated.
    pub faculty: FacultyProfileRequest,
    /// The exemption grants on record for the faculty member.
    #[serde(default)]
    pub exemption_grants: Vec<ExemptionGrantRequest>,
    /// The categorized intellectual contributions on record.
    #[serde(default)]
    pub contributions: Vec<ContributionRequest>,
    /// The professional engagement activities on record.
    #[serde(default)]
    pub activities: Vec<ActivityRequest>,
    /// The reference year the evaluation is anchored to. Always supplied
    /// explicitly, never derived from the system clock.
    pub reference_year: i32,
    /// Explicit evaluation window. Defaults to the canonical current window
    /// ending at the reference year.
    #[serde(default)]
    pub window: Option<WindowRequest>,
}

/// Request body for the `/timeline` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRequest {
    /// The faculty member being projected.
    pub faculty: FacultyProfileRequest,
    /// The exemption grants on record for the faculty member.
    #[serde(default)]
    pub exemption_grants: Vec<ExemptionGrantRequest>,
    /// The categorized intellectual contributions on record.
    #[serde(default)]
    pub contributions: Vec<ContributionRequest>,
    /// The professional engagement activities on record.
    #[serde(default)]
    pub activities: Vec<ActivityRequest>,
    /// The reference year the projection is anchored to.
    pub reference_year: i32,
}

/// Faculty profile information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyProfileRequest {
    /// Unique identifier for the faculty member.
    pub id: String,
    /// The faculty member's display name.
    pub name: String,
    /// The qualification category, if assigned.
    #[serde(default)]
    pub category: Option<FacultyCategory>,
    /// The year the highest degree was conferred, if known.
    #[serde(default)]
    pub degree_year: Option<i32>,
}

/// An evaluation window in a request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowRequest {
    /// First year of the window (inclusive).
    pub year_from: i32,
    /// Last year of the window (inclusive).
    pub year_to: i32,
}

/// An exemption grant in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExemptionGrantRequest {
    /// Unique identifier for the grant.
    pub id: u32,
    /// The exemption policy this grant applies.
    pub exemption_type: ExemptionTypeRequest,
    /// First year of the exemption (inclusive).
    pub year_from: i32,
    /// Last year of the exemption (inclusive), or absent while ongoing.
    #[serde(default)]
    pub year_to: Option<i32>,
    /// Free-text notes recorded by the approver.
    #[serde(default)]
    pub notes: Option<String>,
}

/// An exemption policy definition in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExemptionTypeRequest {
    /// Unique identifier for the policy.
    pub id: u32,
    /// The policy name (e.g., "Programme Leader").
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
    /// Caps a degree-anchored full exemption's duration.
    #[serde(default)]
    pub years_after_degree: Option<u32>,
    /// Extra years of effect after the grant's nominal end.
    #[serde(default)]
    pub grace_period_years: u32,
}

/// A categorized intellectual contribution in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionRequest {
    /// Unique identifier for the contribution.
    pub id: String,
    /// The title of the contribution.
    pub title: String,
    /// The publication year, if recorded.
    #[serde(default)]
    pub year: Option<i32>,
    /// The classification, or absent if not yet categorized.
    #[serde(default)]
    pub publication_type: Option<PublicationType>,
}

/// A professional engagement activity in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRequest {
    /// Unique identifier for the activity.
    pub id: String,
    /// The year the activity took place.
    pub year: i32,
    /// The kind of activity.
    pub activity_type: String,
    /// Free-text description of the activity.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<FacultyProfileRequest> for FacultyProfile {
    fn from(req: FacultyProfileRequest) -> Self {
        FacultyProfile {
            id: req.id,
            name: req.name,
            category: req.category,
            degree_year: req.degree_year,
        }
    }
}

impl From<WindowRequest> for EvaluationWindow {
    fn from(req: WindowRequest) -> Self {
        EvaluationWindow {
            year_from: req.year_from,
            year_to: req.year_to,
        }
    }
}

impl From<ExemptionGrantRequest> for ExemptionGrant {
    fn from(req: ExemptionGrantRequest) -> Self {
        ExemptionGrant {
            id: req.id,
            exemption_type: req.exemption_type.into(),
            year_from: req.year_from,
            year_to: req.year_to,
            notes: req.notes,
        }
    }
}

impl From<ExemptionTypeRequest> for ExemptionType {
    fn from(req: ExemptionTypeRequest) -> Self {
        ExemptionType {
            id: req.id,
            name: req.name,
            description: req.description,
            reduces_ic_requirement: req.reduces_ic_requirement,
            reduces_prj_requirement: req.reduces_prj_requirement,
            reduces_activity_requirement: req.reduces_activity_requirement,
            grants_full_exemption: req.grants_full_exemption,
            ic_reduction: req.ic_reduction,
            prj_reduction: req.prj_reduction,
            activity_reduction: req.activity_reduction,
            years_after_degree: req.years_after_degree,
            grace_period_years: req.grace_period_years,
        }
    }
}

impl From<ContributionRequest> for Contribution {
    fn from(req: ContributionRequest) -> Self {
        Contribution {
            id: req.id,
            title: req.title,
            year: req.year,
            publication_type: req.publication_type,
        }
    }
}

impl From<ActivityRequest> for Activity {
    fn from(req: ActivityRequest) -> Self {
        Activity {
            id: req.id,
            year: req.year,
            activity_type: req.activity_type,
            description: req.description,
        }
    }
}
