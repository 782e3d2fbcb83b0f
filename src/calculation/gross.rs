//! Shared per-year gross income figures.
//!
//! This module computes, once per (params, year) pair, the intermediate
//! figures every scenario breakdown is built from: the vested equity value,
//! the equity-inclusive salary, the statutory 13th salary, total gross, the
//! capped worker-contribution base, and the applicable income-tax rate.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::models::Params;

use super::income_tax::income_tax_rate_percent;
use super::vesting::vested_value_for_year;

/// The per-year intermediate figures shared by all four scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossFigures {
    /// The equity value vesting this year.
    pub rsu_value: Decimal,
    /// Salary plus the vested equity value.
    pub salary_with_equity: Decimal,
    /// The statutory 13th salary (one extra month of base salary; equity
    /// does not participate).
    pub thirteenth_salary: Decimal,
    /// Salary with equity plus the 13th salary.
    pub total_gross: Decimal,
    /// Total gross capped at the schedule's maximum taxable gross. Applies
    /// only to worker-side contributions, never to income tax.
    pub capped_contribution_base: Decimal,
    /// The income-tax rate for this year's total gross.
    pub income_tax_rate_percent: Decimal,
    /// The annualized private health contribution.
    pub annual_private_health: Decimal,
}

/// Computes the shared figures for one year of the horizon.
///
/// The year is 1-based; callers validate `year >= 1` before reaching this
/// function.
pub fn compute_gross_figures(params: &Params, schedule: &FeeSchedule, year: u32) -> GrossFigures {
    let rsu_value = vested_value_for_year(params.equity_grants(), year);
    let salary_with_equity = params.annual_gross_salary() + rsu_value;
    let thirteenth_salary = params.annual_gross_salary() / Decimal::from(12);
    let total_gross = salary_with_equity + thirteenth_salary;

    let max_taxable = schedule.max_taxable_gross();
    let capped_contribution_base = total_gross.min(max_taxable);

    GrossFigures {
        rsu_value,
        salary_with_equity,
        thirteenth_salary,
        total_gross,
        capped_contribution_base,
        income_tax_rate_percent: income_tax_rate_percent(schedule.income_tax(), total_gross),
        annual_private_health: params.monthly_health_contribution() * Decimal::from(12),
    }
}
