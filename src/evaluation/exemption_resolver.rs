//! Exemption resolution functionality.
//!
//! This module determines which exemption grants are active for an
//! evaluation window (including grace-period extension) and whether any of
//! them constitutes a full exemption for a reference year.

use crate::models::{AuditStep, ExemptionGrant, FacultyProfile, FullExemption};

/// The result of a full-exemption search, including the audit step.
#[derive(Debug, Clone)]
pub struct FullExemptionLookup {
    /// The full exemption that applied, or `None`.
    pub full_exemption: Option<FullExemption>,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Returns the grants whose effective interval overlaps `[window_start, window_end]`.
///
/// The effective end of a grant is `year_to + grace_period_years` when
/// `year_to` is set, and unbounded when the grant is ongoing. The returned
/// grants are sorted by grant id ascending; this fixed order is the
/// documented tie-break for every downstream decision that picks a "first"
/// grant.
///
/// # Examples
///
/// ```
/// use qualification_engine::evaluation::active_exemptions;
/// use qualification_engine::models::{ExemptionGrant, ExemptionType};
///
/// let grant = ExemptionGrant {
///     id: 1,
///     exemption_type: ExemptionType {
///         id: 1,
///         name: "Head of Department".to_string(),
///         description: None,
///         reduces_ic_requirement: true,
///         reduces_prj_requirement: false,
///         reduces_activity_requirement: false,
///         grants_full_exemption: false,
///         ic_reduction: 2,
///         prj_reduction: 0,
///         activity_reduction: 0,
///         years_after_degree: None,
///         grace_period_years: 2,
///     },
///     year_from: 2018,
///     year_to: Some(2020),
///     notes: None,
/// };
/// let grants = vec![grant];
///
/// // Grace period keeps the grant active through 2022.
/// assert_eq!(active_exemptions(&grants, 2022, 2027).len(), 1);
/// assert_eq!(active_exemptions(&grants, 2023, 2028).len(), 0);
/// ```
pub fn active_exemptions(
    grants: &[ExemptionGrant],
    window_start: i32,
    window_end: i32,
) -> Vec<&ExemptionGrant> {
    let mut active: Vec<&ExemptionGrant> = grants
        .iter()
        .filter(|grant| {
            let starts_in_time = grant.year_from <= window_end;
            let still_effective = grant
                .effective_end()
                .map_or(true, |end| end >= window_start);
            starts_in_time && still_effective
        })
        .collect();

    active.sort_by_key(|grant| grant.id);
    active
}

/// Returns true when `reference_year` falls inside the grant's grace period.
///
/// True only when the grant has ended and
/// `year_to < reference_year <= year_to + grace_period_years`. Always false
/// for ongoing grants and for grace periods of zero years.
pub fn is_in_grace_period(grant: &ExemptionGrant, reference_year: i32) -> bool {
    match (grant.year_to, grant.effective_end()) {
        (Some(year_to), Some(effective_end)) => {
            year_to < reference_year && reference_year <= effective_end
        }
        _ => false,
    }
}

/// Searches the active grants for a full exemption at `reference_year`.
///
/// Grants are examined in id order (the order [`active_exemptions`] returns
/// them in); the first qualifying grant wins and short-circuits the search.
/// A grant whose type has `grants_full_exemption` qualifies when:
///
/// - `years_after_degree` is set: the profile's degree year is known and
///   `reference_year - degree_year <= years_after_degree`;
/// - otherwise (open-ended "service" exemption): the grant is still ongoing
///   or `reference_year` falls inside its grace period.
pub fn find_full_exemption(
    profile: &FacultyProfile,
    active: &[&ExemptionGrant],
    reference_year: i32,
    step_number: u32,
) -> FullExemptionLookup {
    let mut full_exemption: Option<FullExemption> = None;

    for grant in active {
        let exemption_type = &grant.exemption_type;
        if !exemption_type.grants_full_exemption {
            continue;
        }

        if let Some(years_after_degree) = exemption_type.years_after_degree {
            let Some(degree_year) = profile.degree_year else {
                continue;
            };
            if reference_year - degree_year <= years_after_degree as i32 {
                full_exemption = Some(FullExemption {
                    grant_id: grant.id,
                    type_name: exemption_type.name.clone(),
                    reason: format!(
                        "{}: within {} years of degree conferral ({})",
                        exemption_type.name, years_after_degree, degree_year
                    ),
                });
                break;
            }
        } else if grant.year_to.map_or(true, |end| end >= reference_year) {
            full_exemption = Some(FullExemption {
                grant_id: grant.id,
                type_name: exemption_type.name.clone(),
                reason: format!("{}: currently serving", exemption_type.name),
            });
            break;
        } else if is_in_grace_period(grant, reference_year) {
            if let Some(effective_end) = grant.effective_end() {
                full_exemption = Some(FullExemption {
                    grant_id: grant.id,
                    type_name: exemption_type.name.clone(),
                    reason: format!(
                        "{}: in grace period through {}",
                        exemption_type.name, effective_end
                    ),
                });
                break;
            }
        }
    }

    let reasoning = match &full_exemption {
        Some(exemption) => exemption.reason.clone(),
        None => format!("No full exemption applies for reference year {reference_year}"),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "full_exemption".to_string(),
        rule_name: "Full Exemption Check".to_string(),
        standard_ref: "3.2".to_string(),
        input: serde_json::json!({
            "reference_year": reference_year,
            "active_grants": active.iter().map(|g| g.id).collect::<Vec<_>>(),
            "degree_year": profile.degree_year,
        }),
        output: serde_json::json!({
            "applies": full_exemption.is_some(),
            "grant_id": full_exemption.as_ref().map(|e| e.grant_id),
            "type_name": full_exemption.as_ref().map(|e| e.type_name.clone()),
        }),
        reasoning,
    };

    FullExemptionLookup {
        full_exemption,
        audit_step,
    }
}
