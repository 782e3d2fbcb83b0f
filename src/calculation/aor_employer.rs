//! AOR employer cost breakdown.
//!
//! Under the contractor-agency model the employer pays the equity-inclusive
//! salary plus a flat annual platform fee; no statutory contributions and no
//! 13th salary apply.

use crate::config::FeeSchedule;
use crate::models::{Breakdown, BreakdownItem, Params, Scenario};

use super::gross::GrossFigures;

/// Builds the `(AOR, Employer)` breakdown for one year.
pub fn aor_employer_breakdown(
    params: &Params,
    schedule: &FeeSchedule,
    figures: &GrossFigures,
) -> Breakdown {
    let aor = schedule.aor();
    let annual_fee = aor.platform_annual_fee();
    let total = figures.salary_with_equity + annual_fee;

    let mut items = vec![BreakdownItem::new(
        "Base Salary",
        params.annual_gross_salary(),
    )];
    if !figures.rsu_value.is_zero() {
        items.push(BreakdownItem::new("Vested Equity", figures.rsu_value));
    }
    items.push(BreakdownItem::new(
        format!(
            "AOR Platform Fee (+${}/mo)",
            aor.platform_monthly_fee.normalize()
        ),
        annual_fee,
    ));
    items.push(BreakdownItem::new("Total Employer Cost", total));

    Breakdown {
        scenario: Scenario::AorEmployer,
        title: "Employer pays".to_string(),
        description: "AOR total employer cost including the platform fee".to_string(),
        sources: aor.employer_sources.clone(),
        items,
        total,
    }
}
