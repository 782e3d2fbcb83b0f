//! Income-tax rate lookup.
//!
//! This module rounds a total gross income to its nearest tax bracket and
//! resolves the applicable flat rate from the schedule's lookup table. The
//! table is discrete and non-interpolated; callers must not assume
//! marginal-bracket semantics.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::IncomeTaxTable;

/// Rounds a gross income to the nearest bracket increment.
///
/// Midpoints round away from zero, so a gross exactly between two brackets
/// lands on the higher one.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::round_to_bracket;
/// use rust_decimal::Decimal;
///
/// let bracket = Decimal::from(5_000);
/// assert_eq!(round_to_bracket(Decimal::from(102_400), bracket), Decimal::from(100_000));
/// assert_eq!(round_to_bracket(Decimal::from(102_500), bracket), Decimal::from(105_000));
/// ```
pub fn round_to_bracket(gross: Decimal, bracket_size: Decimal) -> Decimal {
    (gross / bracket_size).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        * bracket_size
}

/// Returns the income-tax rate percentage for a total gross income.
///
/// The gross is rounded to the nearest bracket before lookup; values below
/// the smallest bracket yield zero and values above the largest yield the
/// table's fixed ceiling rate, regardless of magnitude.
pub fn income_tax_rate_percent(table: &IncomeTaxTable, total_gross: Decimal) -> Decimal {
    let rounded = round_to_bracket(total_gross, table.bracket_size);
    table.rate_for_rounded_gross(rounded)
}
