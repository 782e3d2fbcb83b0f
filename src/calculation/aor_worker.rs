//! AOR contractor net income breakdown.
//!
//! Under the contractor-agency model the worker invoices the equity-inclusive
//! salary and pays a simplified tax-regime rate on it; no statutory
//! deductions, no 13th salary, and no bracket lookup apply.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::models::{Breakdown, BreakdownItem, Params, Scenario};

use super::gross::GrossFigures;

/// Builds the `(AOR, Worker)` breakdown for one year.
///
/// The effective rate is the parameter set's contractor tax rate when one
/// was provided, otherwise the schedule's default rate.
pub fn aor_worker_breakdown(
    params: &Params,
    schedule: &FeeSchedule,
    figures: &GrossFigures,
) -> Breakdown {
    let aor = schedule.aor();
    let rate = params
        .contractor_tax_rate_percent()
        .unwrap_or(aor.default_contractor_tax_rate);

    let tax = figures.salary_with_equity * rate / Decimal::ONE_HUNDRED;
    let total = figures.salary_with_equity - tax;

    let mut items = vec![BreakdownItem::new(
        "Base Salary",
        params.annual_gross_salary(),
    )];
    if !figures.rsu_value.is_zero() {
        items.push(BreakdownItem::new("Vested Equity", figures.rsu_value));
    }
    items.push(BreakdownItem::new(
        format!("Simplified Tax Regime (-{}%)", rate.normalize()),
        -tax,
    ));
    items.push(BreakdownItem::new("Take-Home", total));

    Breakdown {
        scenario: Scenario::AorWorker,
        title: "Contractor gets".to_string(),
        description: "AOR worker net income after taxes".to_string(),
        sources: aor.worker_sources.clone(),
        items,
        total,
    }
}
