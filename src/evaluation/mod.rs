//! Evaluation logic for the Faculty Qualification Evaluation Engine.
//!
//! This module contains the engine core: exemption resolution with
//! grace-period handling, reduction aggregation, the category requirement
//! calculator, the rolling-window timeline builder, and the standalone
//! current-status evaluation that ties them together with an audit trace.

use std::time::Instant;

use crate::config::RequirementsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ActualCounts, Activity, AuditTrace, AuditWarning, Contribution, EvaluationWindow,
    ExemptionGrant, FacultyProfile, RequirementOutcome,
};

mod exemption_resolver;
mod reductions;
mod requirements;
mod timeline;

pub use exemption_resolver::{
    FullExemptionLookup, active_exemptions, find_full_exemption, is_in_grace_period,
};
pub use reductions::{
    PROGRAMME_LEADER_POLICY_NAME, ReductionOutcome, ReductionSummary, aggregate_reductions,
};
pub use requirements::{RequirementEvaluation, evaluate_requirements};
pub use timeline::build_timeline;

/// The complete result of a standalone current-status evaluation.
#[derive(Debug, Clone)]
pub struct FacultyEvaluation {
    /// The window the evaluation covered.
    pub window: EvaluationWindow,
    /// Actual record counts inside the window.
    pub counts: ActualCounts,
    /// The requirement verdict.
    pub outcome: RequirementOutcome,
    /// Every decision made along the way, for accreditation reviewers.
    pub audit_trace: AuditTrace,
}

/// Evaluates a faculty member's qualification status for one window.
///
/// Resolves exemptions active in `[window.year_from, window.year_to]`, checks
/// full exemptions against `reference_year`, aggregates partial reductions,
/// and runs the category requirement calculator, collecting an audit step for
/// each stage.
///
/// # Errors
///
/// Returns `InvalidWindow` when the window is inverted, and
/// `CategoryNotConfigured` when an evaluated category has no entry in the
/// requirements configuration.
pub fn evaluate_faculty(
    profile: &FacultyProfile,
    grants: &[ExemptionGrant],
    contributions: &[Contribution],
    activities: &[Activity],
    window: EvaluationWindow,
    reference_year: i32,
    config: &RequirementsConfig,
) -> EngineResult<FacultyEvaluation> {
    if window.year_from > window.year_to {
        return Err(EngineError::InvalidWindow {
            year_from: window.year_from,
            year_to: window.year_to,
        });
    }

    let start_time = Instant::now();
    let mut steps = Vec::with_capacity(3);
    let mut warnings = Vec::new();

    let counts =
        ActualCounts::in_window(contributions, activities, window.year_from, window.year_to);

    let skipped = contributions.iter().filter(|c| !c.is_countable()).count();
    if skipped > 0 {
        warnings.push(AuditWarning {
            code: "SKIPPED_RECORDS".to_string(),
            message: format!(
                "{skipped} contribution(s) skipped for missing year or publication type"
            ),
            severity: "low".to_string(),
        });
    }

    let active = active_exemptions(grants, window.year_from, window.year_to);

    for grant in &active {
        if grant.exemption_type.has_ignored_reductions() {
            warnings.push(AuditWarning {
                code: "IGNORED_REDUCTIONS".to_string(),
                message: format!(
                    "Exemption type '{}' grants a full exemption; its reduction fields are ignored",
                    grant.exemption_type.name
                ),
                severity: "low".to_string(),
            });
        }
    }

    let lookup = find_full_exemption(profile, &active, reference_year, 1);
    steps.push(lookup.audit_step);

    let reduction_outcome = aggregate_reductions(&active, 2);
    steps.push(reduction_outcome.audit_step);

    let evaluation = evaluate_requirements(
        profile.category,
        &counts,
        &reduction_outcome.summary,
        lookup.full_exemption,
        config,
        3,
    )?;
    steps.push(evaluation.audit_step);

    Ok(FacultyEvaluation {
        window,
        counts,
        outcome: evaluation.outcome,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}
