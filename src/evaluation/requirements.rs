//! Requirement calculation functionality.
//!
//! This module applies category-specific base requirements, the Programme
//! Leader floor modifier, and full exemptions to produce a met/not-met
//! verdict with human-readable shortfall messages. It is the single place
//! threshold arithmetic lives: current-status queries and every rolling
//! window invoke this one calculator with different actual-count inputs.

use crate::config::RequirementsConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    ActualCounts, AuditStep, FacultyCategory, FullExemption, QualificationStatus,
    RequirementDimension, RequirementOutcome, RequirementSet, Shortfall,
};

use super::reductions::ReductionSummary;

/// The result of a requirement evaluation, including the audit step.
#[derive(Debug, Clone)]
pub struct RequirementEvaluation {
    /// The verdict for the window.
    pub outcome: RequirementOutcome,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Evaluates category requirements against actual counts.
///
/// Computation order:
///
/// 1. No category, or `Other`: short-circuits to `NotEvaluated` with no
///    numeric work.
/// 2. A full exemption waives all numeric requirements: `FullyExempt`,
///    `met = true`.
/// 3. SA/SP: total-IC and PRJ-article requirements are reduced (clamping at
///    zero) and compared. A Programme Leader floors SA's PRJ requirement at 1
///    and forces SP's to exactly 1 regardless of reduction; the asymmetry is
///    intentional.
/// 4. PA/IP: the activity requirement is reduced (clamping at zero) and
///    compared.
///
/// Shortfalls report the numeric gap for each failing dimension
/// independently; both SA/SP dimensions may fail at once.
pub fn evaluate_requirements(
    category: Option<FacultyCategory>,
    actual: &ActualCounts,
    reductions: &ReductionSummary,
    full_exemption: Option<FullExemption>,
    config: &RequirementsConfig,
    step_number: u32,
) -> EngineResult<RequirementEvaluation> {
    let category = match category {
        None | Some(FacultyCategory::Other) => {
            return Ok(not_evaluated(step_number));
        }
        Some(category) => category,
    };

    if let Some(exemption) = full_exemption {
        return Ok(fully_exempt(category, exemption, step_number));
    }

    let base = config
        .categories
        .get(category.code())
        .ok_or_else(|| EngineError::CategoryNotConfigured {
            category: category.code().to_string(),
        })?;

    let mut shortfalls = Vec::new();

    let (required, reasoning) = if category.uses_contribution_counts() {
        let ic_required = base.ic_total.saturating_sub(reductions.ic_reduction);
        let mut prj_required = base.prj_articles.saturating_sub(reductions.prj_reduction);

        if reductions.is_programme_leader {
            prj_required = match category {
                // SA's floor is clamped, never fixed; SP's is fixed outright.
                FacultyCategory::Sa => prj_required.max(1),
                FacultyCategory::Sp => 1,
                _ => prj_required,
            };
        }

        if actual.prj_articles < prj_required {
            shortfalls.push(prj_shortfall(prj_required, actual.prj_articles));
        }
        if actual.total_ic < ic_required {
            shortfalls.push(ic_shortfall(ic_required, actual.total_ic));
        }

        let required = RequirementSet {
            ic_total: Some(ic_required),
            prj_articles: Some(prj_required),
            activities: None,
            description: format!(
                "{ic_required} intellectual contributions including {prj_required} peer-reviewed journal articles"
            ),
        };
        let reasoning = format!(
            "{} requires {} IC / {} PRJ after reductions; actual {} IC / {} PRJ: {}",
            category.code().to_uppercase(),
            ic_required,
            prj_required,
            actual.total_ic,
            actual.prj_articles,
            verdict(shortfalls.is_empty()),
        );
        (required, reasoning)
    } else {
        let activities_required = base.activities.saturating_sub(reductions.activity_reduction);

        if actual.activities < activities_required {
            shortfalls.push(activity_shortfall(activities_required, actual.activities));
        }

        let required = RequirementSet {
            ic_total: None,
            prj_articles: None,
            activities: Some(activities_required),
            description: format!("{activities_required} professional engagement activities"),
        };
        let reasoning = format!(
            "{} requires {} activities after reductions; actual {}: {}",
            category.code().to_uppercase(),
            activities_required,
            actual.activities,
            verdict(shortfalls.is_empty()),
        );
        (required, reasoning)
    };

    let met = shortfalls.is_empty();
    let outcome = RequirementOutcome {
        status: if met {
            QualificationStatus::Met
        } else {
            QualificationStatus::NotMet
        },
        met,
        required: required.clone(),
        shortfalls: shortfalls.clone(),
        full_exemption: None,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "category_requirements".to_string(),
        rule_name: "Category Requirement Check".to_string(),
        standard_ref: "3.1".to_string(),
        input: serde_json::json!({
            "category": category.code(),
            "actual": actual,
            "reductions": reductions,
        }),
        output: serde_json::json!({
            "met": met,
            "required": required,
            "shortfalls": shortfalls.len(),
        }),
        reasoning,
    };

    Ok(RequirementEvaluation {
        outcome,
        audit_step,
    })
}

fn verdict(met: bool) -> &'static str {
    if met { "met" } else { "not met" }
}

fn ic_shortfall(required: u32, actual: u32) -> Shortfall {
    let gap = required - actual;
    Shortfall {
        dimension: RequirementDimension::IntellectualContributions,
        required,
        actual,
        message: format!(
            "{gap} more intellectual contribution{} needed ({actual} of {required})",
            if gap == 1 { "" } else { "s" }
        ),
    }
}

fn prj_shortfall(required: u32, actual: u32) -> Shortfall {
    let gap = required - actual;
    Shortfall {
        dimension: RequirementDimension::PrjArticles,
        required,
        actual,
        message: format!(
            "{gap} more peer-reviewed journal article{} needed ({actual} of {required})",
            if gap == 1 { "" } else { "s" }
        ),
    }
}

fn activity_shortfall(required: u32, actual: u32) -> Shortfall {
    let gap = required - actual;
    Shortfall {
        dimension: RequirementDimension::Activities,
        required,
        actual,
        message: format!(
            "{gap} more professional engagement activit{} needed ({actual} of {required})",
            if gap == 1 { "y" } else { "ies" }
        ),
    }
}

fn not_evaluated(step_number: u32) -> RequirementEvaluation {
    RequirementEvaluation {
        outcome: RequirementOutcome {
            status: QualificationStatus::NotEvaluated,
            met: false,
            required: RequirementSet::descriptive("No requirements apply to this category"),
            shortfalls: Vec::new(),
            full_exemption: None,
        },
        audit_step: AuditStep {
            step_number,
            rule_id: "category_requirements".to_string(),
            rule_name: "Category Requirement Check".to_string(),
            standard_ref: "3.1".to_string(),
            input: serde_json::json!({ "category": null }),
            output: serde_json::json!({ "status": "not_evaluated" }),
            reasoning: "Profile has no evaluated category; no requirements apply".to_string(),
        },
    }
}

fn fully_exempt(
    category: FacultyCategory,
    exemption: FullExemption,
    step_number: u32,
) -> RequirementEvaluation {
    let audit_step = AuditStep {
        step_number,
        rule_id: "category_requirements".to_string(),
        rule_name: "Category Requirement Check".to_string(),
        standard_ref: "3.1".to_string(),
        input: serde_json::json!({
            "category": category.code(),
            "full_exemption_grant": exemption.grant_id,
        }),
        output: serde_json::json!({ "status": "fully_exempt", "met": true }),
        reasoning: exemption.reason.clone(),
    };

    RequirementEvaluation {
        outcome: RequirementOutcome {
            status: QualificationStatus::FullyExempt,
            met: true,
            required: RequirementSet::descriptive(exemption.reason.clone()),
            shortfalls: Vec::new(),
            full_exemption: Some(exemption),
        },
        audit_step,
    }
}
