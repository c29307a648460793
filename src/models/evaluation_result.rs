//! Evaluation result models for the Faculty Qualification Evaluation Engine.
//!
//! This module contains the structures that capture all outputs from a
//! qualification evaluation: actual counts, post-reduction requirement sets,
//! shortfalls, rolling-window timelines, and audit traces.

use serde::{Deserialize, Serialize};

use super::{Activity, Contribution};

/// A closed year interval, inclusive on both ends.
///
/// Every count produced by the engine is scoped to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationWindow {
    /// First year of the window (inclusive).
    pub year_from: i32,
    /// Last year of the window (inclusive).
    pub year_to: i32,
}

/// Actual record counts inside an evaluation window.
///
/// # Examples
///
/// ```
/// use qualification_engine::models::{ActualCounts, Contribution, PublicationType};
///
/// let contributions = vec![Contribution {
///     id: "ic_001".to_string(),
///     title: "Journal article".to_string(),
///     year: Some(2024),
///     publication_type: Some(PublicationType::PrjArticle),
/// }];
/// let counts = ActualCounts::in_window(&contributions, &[], 2019, 2025);
/// assert_eq!(counts.total_ic, 1);
/// assert_eq!(counts.prj_articles, 1);
/// assert_eq!(counts.activities, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActualCounts {
    /// All countable intellectual contributions in the window.
    pub total_ic: u32,
    /// Peer-reviewed journal articles in the window (a subset of `total_ic`).
    pub prj_articles: u32,
    /// Professional engagement activities in the window.
    pub activities: u32,
}

impl ActualCounts {
    /// Counts contributions and activities inside `[year_from, year_to]`.
    ///
    /// Contributions with a missing year or publication type are skipped;
    /// callers are expected to pre-filter but the engine never fails on them.
    pub fn in_window(
        contributions: &[Contribution],
        activities: &[Activity],
        year_from: i32,
        year_to: i32,
    ) -> Self {
        let mut counts = Self::default();

        for contribution in contributions {
            if !contribution.is_countable() {
                continue;
            }
            let Some(year) = contribution.year else {
                continue;
            };
            if year >= year_from && year <= year_to {
                counts.total_ic += 1;
                if contribution.is_prj_article() {
                    counts.prj_articles += 1;
                }
            }
        }

        counts.activities = activities
            .iter()
            .filter(|a| a.year >= year_from && a.year <= year_to)
            .count() as u32;

        counts
    }
}

/// A counting dimension a category requirement applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementDimension {
    /// Total intellectual contributions.
    IntellectualContributions,
    /// Peer-reviewed journal articles.
    PrjArticles,
    /// Professional engagement activities.
    Activities,
}

/// The overall verdict of a requirement evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationStatus {
    /// All applicable requirements are satisfied.
    Met,
    /// At least one requirement is short.
    NotMet,
    /// A full exemption waived all numeric requirements for the window.
    FullyExempt,
    /// The profile has no category (or `Other`); no requirements apply.
    NotEvaluated,
}

/// The post-reduction requirements a faculty member was held to.
///
/// Only the dimensions relevant to the evaluated category are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Required total intellectual contributions, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ic_total: Option<u32>,
    /// Required peer-reviewed journal articles, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prj_articles: Option<u32>,
    /// Required professional engagement activities, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<u32>,
    /// Human-readable summary of what was required.
    pub description: String,
}

impl RequirementSet {
    /// A requirement set that holds the faculty member to nothing, with the
    /// given explanation (used for full exemptions and unevaluated profiles).
    pub fn descriptive(description: impl Into<String>) -> Self {
        Self {
            ic_total: None,
            prj_articles: None,
            activities: None,
            description: description.into(),
        }
    }
}

/// A single failed requirement dimension with its numeric gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// The dimension that fell short.
    pub dimension: RequirementDimension,
    /// The post-reduction requirement.
    pub required: u32,
    /// The actual count in the window.
    pub actual: u32,
    /// Human-readable description of the gap.
    pub message: String,
}

/// A full exemption that applied to an evaluation, with its display reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullExemption {
    /// The grant that carried the exemption.
    pub grant_id: u32,
    /// The name of the exemption policy.
    pub type_name: String,
    /// Human-readable reason the exemption applied.
    pub reason: String,
}

/// The complete verdict for one evaluation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementOutcome {
    /// The overall verdict.
    pub status: QualificationStatus,
    /// True when the record satisfies the requirements (always true under a
    /// full exemption, always false only when a numeric check failed).
    pub met: bool,
    /// What was required after reductions.
    pub required: RequirementSet,
    /// The failing dimensions, empty when `met`.
    pub shortfalls: Vec<Shortfall>,
    /// The full exemption that applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_exemption: Option<FullExemption>,
}

/// Per-year record counts used by the rolling-window timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBucket {
    /// The calendar year.
    pub year: i32,
    /// Peer-reviewed journal articles recorded in this year.
    pub prj_articles: u32,
    /// All other countable intellectual contributions in this year.
    pub other_ic: u32,
    /// Professional engagement activities in this year.
    pub activities: u32,
}

/// One rolling window's evaluation within a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEvaluation {
    /// The window this evaluation covers.
    pub window: EvaluationWindow,
    /// Actual counts summed from the year buckets inside the window.
    pub counts: ActualCounts,
    /// The requirement verdict for this window.
    pub outcome: RequirementOutcome,
    /// True when this is the canonical current window
    /// (window end equals the reference year).
    pub is_current: bool,
    /// True when the window ends after the reference year.
    pub is_future: bool,
}

/// The complete rolling-window projection for a faculty member.
///
/// A pure function of its inputs: identical inputs and reference year yield
/// identical output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineResult {
    /// The reference year the projection was anchored to.
    pub reference_year: i32,
    /// The fixed window width in years.
    pub window_years: u32,
    /// Per-year record counts across the whole timeline.
    pub year_buckets: Vec<YearBucket>,
    /// Every evaluated rolling window, oldest first.
    pub windows: Vec<WindowEvaluation>,
    /// Future-dated windows that are not met: lapses the faculty member can
    /// still act to prevent.
    pub risk_periods: Vec<WindowEvaluation>,
    /// True iff `risk_periods` is non-empty.
    pub at_risk: bool,
}

/// A single step in the audit trace recording an evaluation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the accreditation standard section for this rule.
    pub standard_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during evaluation.
///
/// Warnings indicate data issues that don't prevent evaluation but may
/// require attention, such as records skipped for missing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an evaluation.
///
/// Records every decision made during the evaluation for transparency
/// toward accreditation reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of evaluation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PublicationType;

    fn contribution(id: &str, year: Option<i32>, kind: Option<PublicationType>) -> Contribution {
        Contribution {
            id: id.to_string(),
            title: format!("title {id}"),
            year,
            publication_type: kind,
        }
    }

    fn activity(id: &str, year: i32) -> Activity {
        Activity {
            id: id.to_string(),
            year,
            activity_type: "consulting".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_counts_scope_to_closed_interval() {
        let contributions = vec![
            contribution("a", Some(2019), Some(PublicationType::PrjArticle)),
            contribution("b", Some(2025), Some(PublicationType::OtherIc)),
            contribution("c", Some(2018), Some(PublicationType::PrjArticle)),
            contribution("d", Some(2026), Some(PublicationType::OtherIc)),
        ];
        let activities = vec![activity("x", 2019), activity("y", 2025), activity("z", 2026)];

        let counts = ActualCounts::in_window(&contributions, &activities, 2019, 2025);
        assert_eq!(counts.total_ic, 2);
        assert_eq!(counts.prj_articles, 1);
        assert_eq!(counts.activities, 2);
    }

    #[test]
    fn test_counts_skip_uncountable_contributions() {
        let contributions = vec![
            contribution("a", None, Some(PublicationType::PrjArticle)),
            contribution("b", Some(2024), None),
            contribution("c", Some(2024), Some(PublicationType::PeerReviewedOther)),
        ];

        let counts = ActualCounts::in_window(&contributions, &[], 2019, 2025);
        assert_eq!(counts.total_ic, 1);
        assert_eq!(counts.prj_articles, 0);
    }

    #[test]
    fn test_empty_record_sets_produce_zero_counts() {
        let counts = ActualCounts::in_window(&[], &[], 2019, 2025);
        assert_eq!(counts, ActualCounts::default());
    }

    #[test]
    fn test_peer_reviewed_other_counts_toward_total_only() {
        let contributions = vec![contribution(
            "a",
            Some(2024),
            Some(PublicationType::PeerReviewedOther),
        )];
        let counts = ActualCounts::in_window(&contributions, &[], 2019, 2025);
        assert_eq!(counts.total_ic, 1);
        assert_eq!(counts.prj_articles, 0);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&QualificationStatus::Met).unwrap(),
            "\"met\""
        );
        assert_eq!(
            serde_json::to_string(&QualificationStatus::NotMet).unwrap(),
            "\"not_met\""
        );
        assert_eq!(
            serde_json::to_string(&QualificationStatus::FullyExempt).unwrap(),
            "\"fully_exempt\""
        );
        assert_eq!(
            serde_json::to_string(&QualificationStatus::NotEvaluated).unwrap(),
            "\"not_evaluated\""
        );
    }

    #[test]
    fn test_requirement_set_skips_absent_dimensions_in_json() {
        let set = RequirementSet {
            ic_total: Some(6),
            prj_articles: Some(3),
            activities: None,
            description: "6 ICs including 3 PRJ articles".to_string(),
        };
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.contains("\"ic_total\":6"));
        assert!(!json.contains("activities"));
    }

    #[test]
    fn test_descriptive_requirement_set_is_all_none() {
        let set = RequirementSet::descriptive("fully exempt");
        assert_eq!(set.ic_total, None);
        assert_eq!(set.prj_articles, None);
        assert_eq!(set.activities, None);
        assert_eq!(set.description, "fully exempt");
    }
}
