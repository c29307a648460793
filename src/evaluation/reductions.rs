//! Reduction aggregation functionality.
//!
//! This module sums the quota reductions contributed by active partial
//! exemptions, per requirement dimension, and detects the Programme Leader
//! capability flag.

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ExemptionGrant};

/// The exemption-type name that denotes the Programme Leader policy.
///
/// Programme Leader changes category floors rather than quotas, so it is
/// surfaced as a capability flag instead of a numeric reduction. Matching is
/// case-insensitive.
pub const PROGRAMME_LEADER_POLICY_NAME: &str = "Programme Leader";

/// Summed quota reductions across active partial exemptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReductionSummary {
    /// Total reduction of the total-IC requirement.
    pub ic_reduction: u32,
    /// Total reduction of the PRJ-article requirement.
    pub prj_reduction: u32,
    /// Total reduction of the activity requirement.
    pub activity_reduction: u32,
    /// True if any active exemption carries the Programme Leader policy.
    pub is_programme_leader: bool,
}

/// The result of aggregating reductions, including the audit step.
#[derive(Debug, Clone)]
pub struct ReductionOutcome {
    /// The summed reductions and capability flags.
    pub summary: ReductionSummary,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Sums quota reductions across the active exemption grants.
///
/// Grants whose type grants a full exemption are excluded from the sums even
/// if their reduction fields are populated: full exemption and partial
/// reduction are mutually exclusive per grant. Each dimension's magnitude
/// only counts when the corresponding `reduces_*` flag is set.
///
/// The Programme Leader flag rides on the policy name, not the reduction, so
/// it is detected across all active grants including full-exemption ones.
pub fn aggregate_reductions(active: &[&ExemptionGrant], step_number: u32) -> ReductionOutcome {
    let mut summary = ReductionSummary::default();

    for grant in active {
        let exemption_type = &grant.exemption_type;

        if is_programme_leader_policy(&exemption_type.name) {
            summary.is_programme_leader = true;
        }

        if exemption_type.grants_full_exemption {
            continue;
        }

        if exemption_type.reduces_ic_requirement {
            summary.ic_reduction += exemption_type.ic_reduction;
        }
        if exemption_type.reduces_prj_requirement {
            summary.prj_reduction += exemption_type.prj_reduction;
        }
        if exemption_type.reduces_activity_requirement {
            summary.activity_reduction += exemption_type.activity_reduction;
        }
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "reduction_aggregation".to_string(),
        rule_name: "Reduction Aggregation".to_string(),
        standard_ref: "3.2".to_string(),
        input: serde_json::json!({
            "active_grants": active.iter().map(|g| g.id).collect::<Vec<_>>(),
        }),
        output: serde_json::json!(summary),
        reasoning: format!(
            "Reductions from {} active grant(s): IC -{}, PRJ -{}, activities -{}{}",
            active.len(),
            summary.ic_reduction,
            summary.prj_reduction,
            summary.activity_reduction,
            if summary.is_programme_leader {
                "; Programme Leader floor applies"
            } else {
                ""
            }
        ),
    };

    ReductionOutcome {
        summary,
        audit_step,
    }
}

fn is_programme_leader_policy(name: &str) -> bool {
    name.trim().eq_ignore_ascii_case(PROGRAMME_LEADER_POLICY_NAME)
}
