//! Core data models for the Faculty Qualification Evaluation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod evaluation_result;
mod exemption;
mod faculty;
mod record;

pub use evaluation_result::{
    ActualCounts, AuditStep, AuditTrace, AuditWarning, EvaluationWindow, FullExemption,
    QualificationStatus, RequirementDimension, RequirementOutcome, RequirementSet, Shortfall,
    TimelineResult, WindowEvaluation, YearBucket,
};
pub use exemption::{ExemptionGrant, ExemptionType};
pub use faculty::{FacultyCategory, FacultyProfile};
pub use record::{Activity, Contribution, PublicationType};
