//! EOR worker net salary breakdown.
//!
//! This module builds the worker-side breakdown under the Employer-of-Record
//! model: total gross plus the private health benefit, minus the capped
//! statutory deductions and the uncapped income tax.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::models::{Breakdown, BreakdownItem, Params, Scenario};

use super::gross::GrossFigures;

/// Builds the `(EOR, Worker)` breakdown for one year.
///
/// Pension, public health and social services deductions apply to the capped
/// contribution base (marked `*` in their labels); income tax applies to the
/// full total gross at the rate resolved from the bracket table.
pub fn eor_worker_breakdown(
    params: &Params,
    schedule: &FeeSchedule,
    figures: &GrossFigures,
) -> Breakdown {
    let rates = schedule.eor_worker();
    let hundred = Decimal::ONE_HUNDRED;

    let pension = figures.capped_contribution_base * rates.pension / hundred;
    let public_health = figures.capped_contribution_base * rates.public_health / hundred;
    let social_services = figures.capped_contribution_base * rates.social_services / hundred;
    let income_tax = figures.total_gross * figures.income_tax_rate_percent / hundred;

    let total = figures.total_gross + figures.annual_private_health
        - pension
        - public_health
        - social_services
        - income_tax;

    let mut items = vec![BreakdownItem::new(
        "Base Salary",
        params.annual_gross_salary(),
    )];
    if !figures.rsu_value.is_zero() {
        items.push(BreakdownItem::new("Vested Equity", figures.rsu_value));
    }
    items.push(BreakdownItem::new(
        "Gross 13th Salary",
        figures.thirteenth_salary,
    ));
    items.push(BreakdownItem::new(
        "Private Health Insurance (not cash)",
        figures.annual_private_health,
    ));
    items.push(BreakdownItem::new(
        format!("Pension (-{}%*)", rates.pension.normalize()),
        -pension,
    ));
    items.push(BreakdownItem::new(
        format!(
            "Public Health Insurance (-{}%*)",
            rates.public_health.normalize()
        ),
        -public_health,
    ));
    items.push(BreakdownItem::new(
        format!("Social Services (-{}%*)", rates.social_services.normalize()),
        -social_services,
    ));
    items.push(BreakdownItem::new(
        format!(
            "Income Tax (-{}%)",
            figures.income_tax_rate_percent.normalize()
        ),
        -income_tax,
    ));
    items.push(BreakdownItem::new("Net Salary", total));

    Breakdown {
        scenario: Scenario::EorWorker,
        title: "Employee gets".to_string(),
        description: "EOR worker net salary after all deductions".to_string(),
        sources: rates.sources.clone(),
        items,
        total,
    }
}
