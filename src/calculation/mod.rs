//! Calculation logic for the compensation engine.
//!
//! This module contains all the calculation functions for comparing the EOR
//! and AOR engagement models, including equity vesting amortization, the
//! income-tax bracket lookup, the shared per-year gross figures, one
//! breakdown builder per scenario, and the year-by-year series used for
//! charting.

mod aor_employer;
mod aor_worker;
mod breakdowns;
mod eor_employer;
mod eor_worker;
mod gross;
mod income_tax;
mod vesting;

pub use aor_employer::aor_employer_breakdown;
pub use aor_worker::aor_worker_breakdown;
pub use breakdowns::{compute_breakdowns, compute_yearly_series};
pub use eor_employer::eor_employer_breakdown;
pub use eor_worker::eor_worker_breakdown;
pub use gross::{GrossFigures, compute_gross_figures};
pub use income_tax::{income_tax_rate_percent, round_to_bracket};
pub use vesting::{vested_value_for_year, vesting_horizon_years};
