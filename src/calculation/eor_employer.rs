//! EOR employer cost breakdown.
//!
//! This module builds the total-employer-cost breakdown under the
//! Employer-of-Record model: total gross plus the annualized private health
//! contribution plus every employer-side statutory contribution, each
//! applied uncapped to total gross.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::models::{Breakdown, BreakdownItem, Params, Scenario};

use super::gross::GrossFigures;

/// Builds the `(EOR, Employer)` breakdown for one year.
///
/// Item labels embed the live percentages from the schedule, so the labels
/// can never drift from the values used numerically.
pub fn eor_employer_breakdown(
    params: &Params,
    schedule: &FeeSchedule,
    figures: &GrossFigures,
) -> Breakdown {
    let rates = schedule.eor_employer();
    let hundred = Decimal::ONE_HUNDRED;

    let pension = figures.total_gross * rates.pension / hundred;
    let social_services = figures.total_gross * rates.social_services / hundred;
    let public_health = figures.total_gross * rates.public_health / hundred;
    let employment_fund = figures.total_gross * rates.employment_fund / hundred;
    let life_insurance = figures.total_gross * rates.life_insurance / hundred;
    let accident_insurance = figures.total_gross * rates.accident_insurance / hundred;

    let total = figures.total_gross
        + figures.annual_private_health
        + pension
        + social_services
        + public_health
        + employment_fund
        + life_insurance
        + accident_insurance;

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
        "Private Health Insurance",
        figures.annual_private_health,
    ));
    items.push(BreakdownItem::new(
        format!("Pension (+{}%)", rates.pension.normalize()),
        pension,
    ));
    items.push(BreakdownItem::new(
        format!("Social Services (+{}%)", rates.social_services.normalize()),
        social_services,
    ));
    items.push(BreakdownItem::new(
        format!(
            "Public Health Insurance (+{}%)",
            rates.public_health.normalize()
        ),
        public_health,
    ));
    items.push(BreakdownItem::new(
        format!("Employment Fund (+{}%)", rates.employment_fund.normalize()),
        employment_fund,
    ));
    items.push(BreakdownItem::new(
        format!("Life Insurance (+{}%)", rates.life_insurance.normalize()),
        life_insurance,
    ));
    items.push(BreakdownItem::new(
        format!(
            "Accident Insurance (+{}%)",
            rates.accident_insurance.normalize()
        ),
        accident_insurance,
    ));
    items.push(BreakdownItem::new("Total Employer Cost", total));

    Breakdown {
        scenario: Scenario::EorEmployer,
        title: "Employer pays".to_string(),
        description: "EOR total employer cost including all contributions.".to_string(),
        sources: rates.sources.clone(),
        items,
        total,
    }
}
