//! Breakdown engine entry points.
//!
//! This module composes the per-scenario builders into the two public
//! computation entry points: [`compute_breakdowns`] for a single year and
//! [`compute_yearly_series`] for the full vesting horizon.

use std::collections::BTreeMap;

use crate::config::FeeSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::{Breakdown, ModelTotals, Params, Scenario, YearlyDatum};

use super::aor_employer::aor_employer_breakdown;
use super::aor_worker::aor_worker_breakdown;
use super::eor_employer::eor_employer_breakdown;
use super::eor_worker::eor_worker_breakdown;
use super::gross::compute_gross_figures;
use super::vesting::vesting_horizon_years;

/// Computes the four scenario breakdowns for one year of the horizon.
///
/// The result always contains exactly one entry per [`Scenario`]. The
/// computation is pure: identical inputs yield identical outputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParam`] if `year` is zero; years are
/// 1-based.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::compute_breakdowns;
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::{Params, Scenario};
///
/// # fn main() -> Result<(), salary_engine::error::EngineError> {
/// let loader = ConfigLoader::load("./config/argentina")?;
/// let breakdowns = compute_breakdowns(&Params::default(), loader.schedule(), 1)?;
/// assert_eq!(breakdowns.len(), 4);
/// assert!(breakdowns.contains_key(&Scenario::EorWorker));
/// # Ok(())
/// # }
/// ```
pub fn compute_breakdowns(
    params: &Params,
    schedule: &FeeSchedule,
    year: u32,
) -> EngineResult<BTreeMap<Scenario, Breakdown>> {
    if year == 0 {
        return Err(EngineError::InvalidParam {
            field: "year".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    let figures = compute_gross_figures(params, schedule, year);

    let mut breakdowns = BTreeMap::new();
    breakdowns.insert(
        Scenario::EorEmployer,
        eor_employer_breakdown(params, schedule, &figures),
    );
    breakdowns.insert(
        Scenario::EorWorker,
        eor_worker_breakdown(params, schedule, &figures),
    );
    breakdowns.insert(
        Scenario::AorEmployer,
        aor_employer_breakdown(params, schedule, &figures),
    );
    breakdowns.insert(
        Scenario::AorWorker,
        aor_worker_breakdown(params, schedule, &figures),
    );

    Ok(breakdowns)
}

/// Computes the scenario totals for every year of the vesting horizon.
///
/// The horizon is the longest vesting period across all grants, with a
/// floor of one year; the series is returned in increasing year order
/// starting at year 1.
pub fn compute_yearly_series(params: &Params, schedule: &FeeSchedule) -> Vec<YearlyDatum> {
    let horizon = vesting_horizon_years(params.equity_grants());

    (1..=horizon)
        .map(|year| {
            let figures = compute_gross_figures(params, schedule, year);
            YearlyDatum {
                year,
                eor: ModelTotals {
                    employer: eor_employer_breakdown(params, schedule, &figures).total,
                    worker: eor_worker_breakdown(params, schedule, &figures).total,
                },
                aor: ModelTotals {
                    employer: aor_employer_breakdown(params, schedule, &figures).total,
                    worker: aor_worker_breakdown(params, schedule, &figures).total,
                },
            }
        })
        .collect()
}
