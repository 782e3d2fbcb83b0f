//! Equity vesting amortization.
//!
//! This module computes the cash-equivalent value vesting in a given year
//! across a set of equity grants, and the horizon over which any value is
//! still vesting.

use rust_decimal::Decimal;

use crate::models::EquityGrant;

/// Returns the total grant value vesting in the given 1-based year.
///
/// Each grant vests in equal annual installments over its vesting period,
/// starting in year 1. A grant contributes its annual installment for years
/// `1..=vesting_period_years` and zero thereafter. Grants are independent;
/// overlapping grants simply sum.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::vested_value_for_year;
/// use salary_engine::models::EquityGrant;
/// use rust_decimal::Decimal;
///
/// let grants = vec![EquityGrant::unit_based(
///     Decimal::from(1_000),
///     Decimal::from(50),
///     4,
/// )
/// .unwrap()];
///
/// assert_eq!(vested_value_for_year(&grants, 1), Decimal::from(12_500));
/// assert_eq!(vested_value_for_year(&grants, 4), Decimal::from(12_500));
/// assert_eq!(vested_value_for_year(&grants, 5), Decimal::ZERO);
/// ```
pub fn vested_value_for_year(grants: &[EquityGrant], year: u32) -> Decimal {
    grants
        .iter()
        .filter(|grant| year <= grant.vesting_period_years())
        .map(|grant| grant.annual_installment())
        .sum()
}

/// Returns the number of years the computation horizon spans.
///
/// The horizon is the longest vesting period across all grants, with a
/// floor of one year so that a grantless parameter set still yields a
/// single-year series.
pub fn vesting_horizon_years(grants: &[EquityGrant]) -> u32 {
    grants
        .iter()
        .map(EquityGrant::vesting_period_years)
        .max()
        .unwrap_or(1)
        .max(1)
}
