//! Rolling-window timeline construction.
//!
//! This module buckets contributions and activities by year, then evaluates
//! every sliding fixed-width window across a faculty member's whole timeline,
//! including windows ending in the future, to surface periods where
//! qualification would currently fail if nothing changes.

use crate::config::RequirementsConfig;
use crate::error::EngineResult;
use crate::models::{
    ActualCounts, Activity, Contribution, EvaluationWindow, ExemptionGrant, FacultyProfile,
    QualificationStatus, TimelineResult, WindowEvaluation, YearBucket,
};

use super::exemption_resolver::{active_exemptions, find_full_exemption};
use super::reductions::aggregate_reductions;
use super::requirements::evaluate_requirements;

/// Builds the rolling-window qualification projection for a faculty member.
///
/// Year buckets span from the earliest recorded year (or the reference year
/// if no records exist) through at least the reference year. Windows of
/// `window_years` width slide their end year from
/// `max(min_year + window_years - 1, reference_year - horizon_years)` through
/// `max(max_year, reference_year) + horizon_years`, so the projection always
/// looks past the latest known record to surface upcoming risk before it
/// materializes.
///
/// Each window resolves exemptions for its own year span and checks full
/// exemptions against the window's end year, so a degree-anchored exemption
/// expires in later windows exactly as it would when those windows become
/// current.
///
/// This is a pure function: identical inputs and reference year yield
/// identical output. Windows moving from future to current to past as the
/// reference year advances is the only state-like concept, and it is implicit
/// in the explicit `reference_year` parameter.
pub fn build_timeline(
    profile: &FacultyProfile,
    grants: &[ExemptionGrant],
    contributions: &[Contribution],
    activities: &[Activity],
    reference_year: i32,
    config: &RequirementsConfig,
) -> EngineResult<TimelineResult> {
    let record_years = contributions
        .iter()
        .filter(|c| c.is_countable())
        .filter_map(|c| c.year)
        .chain(activities.iter().map(|a| a.year));

    let (mut min_year, mut max_year) = (reference_year, reference_year);
    for year in record_years {
        min_year = min_year.min(year);
        max_year = max_year.max(year);
    }

    let year_buckets = bucket_by_year(contributions, activities, min_year, max_year);

    let window_years = config.window.window_years.max(1) as i32;
    let horizon = config.window.horizon_years as i32;
    let end_first = (min_year + window_years - 1).max(reference_year - horizon);
    let end_last = end_first.max(max_year.max(reference_year) + horizon);

    let mut windows = Vec::with_capacity((end_last - end_first + 1) as usize);
    for end in end_first..=end_last {
        let start = end - window_years + 1;
        let counts = sum_buckets(&year_buckets, start, end);

        let active = active_exemptions(grants, start, end);
        let full_exemption = find_full_exemption(profile, &active, end, 1).full_exemption;
        let reductions = aggregate_reductions(&active, 2).summary;
        let evaluation = evaluate_requirements(
            profile.category,
            &counts,
            &reductions,
            full_exemption,
            config,
            3,
        )?;

        windows.push(WindowEvaluation {
            window: EvaluationWindow {
                year_from: start,
                year_to: end,
            },
            counts,
            outcome: evaluation.outcome,
            is_current: end == reference_year,
            is_future: end > reference_year,
        });
    }

    let risk_periods: Vec<WindowEvaluation> = windows
        .iter()
        .filter(|w| w.is_future && w.outcome.status == QualificationStatus::NotMet)
        .cloned()
        .collect();
    let at_risk = !risk_periods.is_empty();

    Ok(TimelineResult {
        reference_year,
        window_years: config.window.window_years,
        year_buckets,
        windows,
        risk_periods,
        at_risk,
    })
}

/// Buckets countable contributions and activities per year over
/// `[min_year, max_year]`.
fn bucket_by_year(
    contributions: &[Contribution],
    activities: &[Activity],
    min_year: i32,
    max_year: i32,
) -> Vec<YearBucket> {
    let mut buckets: Vec<YearBucket> = (min_year..=max_year)
        .map(|year| YearBucket {
            year,
            prj_articles: 0,
            other_ic: 0,
            activities: 0,
        })
        .collect();

    for contribution in contributions {
        if !contribution.is_countable() {
            continue;
        }
        let Some(year) = contribution.year else {
            continue;
        };
        if year < min_year || year > max_year {
            continue;
        }
        let bucket = &mut buckets[(year - min_year) as usize];
        if contribution.is_prj_article() {
            bucket.prj_articles += 1;
        } else {
            bucket.other_ic += 1;
        }
    }

    for activity in activities {
        if activity.year < min_year || activity.year > max_year {
            continue;
        }
        buckets[(activity.year - min_year) as usize].activities += 1;
    }

    buckets
}

/// Sums bucketed counts inside `[year_from, year_to]`.
fn sum_buckets(buckets: &[YearBucket], year_from: i32, year_to: i32) -> ActualCounts {
    let mut counts = ActualCounts::default();
    for bucket in buckets {
        if bucket.year < year_from || bucket.year > year_to {
            continue;
        }
        counts.prj_articles += bucket.prj_articles;
        counts.total_ic += bucket.prj_articles + bucket.other_ic;
        counts.activities += bucket.activities;
    }
    counts
}
