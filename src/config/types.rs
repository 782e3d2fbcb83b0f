//! Configuration types for the fee/tax schedule.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML schedule files. The aggregate [`FeeSchedule`]
//! is the injectable configuration object consumed by every calculation:
//! alternative jurisdictions are alternative YAML directories, not code
//! changes.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};

/// Metadata about a jurisdiction's fee schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The jurisdiction code (e.g., "argentina").
    pub jurisdiction: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the primary documentation for this schedule.
    pub source_url: String,
}

/// Employer-side annual contribution rates under the EOR model.
///
/// Each rate is a flat percentage of total gross, applied uncapped.
#[derive(Debug, Clone, Deserialize)]
pub struct EorEmployerRates {
    /// Citation URLs for these rates.
    pub sources: Vec<String>,
    /// Pension contribution rate.
    pub pension: Decimal,
    /// Social services (PAMI) contribution rate.
    pub social_services: Decimal,
    /// Public health insurance contribution rate.
    pub public_health: Decimal,
    /// Employment fund contribution rate.
    pub employment_fund: Decimal,
    /// Life insurance rate.
    pub life_insurance: Decimal,
    /// Accident insurance (ART) rate.
    pub accident_insurance: Decimal,
}

/// Worker-side annual deduction rates under the EOR model.
///
/// Each rate applies to the capped taxable base, not to total gross.
#[derive(Debug, Clone, Deserialize)]
pub struct EorWorkerRates {
    /// Citation URLs for these rates.
    pub sources: Vec<String>,
    /// Pension deduction rate.
    pub pension: Decimal,
    /// Public health insurance deduction rate.
    pub public_health: Decimal,
    /// Social services (PAMI) deduction rate.
    pub social_services: Decimal,
}

/// Fees and defaults for the AOR model.
#[derive(Debug, Clone, Deserialize)]
pub struct AorFees {
    /// Citation URLs for the employer-side fee.
    pub employer_sources: Vec<String>,
    /// Citation URLs for the worker-side tax regime.
    pub worker_sources: Vec<String>,
    /// The flat monthly platform fee charged to the employer.
    pub platform_monthly_fee: Decimal,
    /// The default simplified tax-regime rate for contractors.
    pub default_contractor_tax_rate: Decimal,
}

impl AorFees {
    /// Returns the annualized platform fee.
    pub fn platform_annual_fee(&self) -> Decimal {
        self.platform_monthly_fee * Decimal::from(12)
    }
}

/// The cap on the employee-contribution base.
///
/// Derived from a fixed local-currency monthly ceiling converted at a fixed
/// exchange rate, times the number of statutory salary payments per year.
/// Caps only the worker-side contribution base, never the income-tax base.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionCap {
    /// The monthly ceiling in local currency.
    pub monthly_ceiling_local: Decimal,
    /// Local currency units per USD.
    pub local_per_usd: Decimal,
    /// Statutory salary payments per year (12 plus the 13th salary).
    pub statutory_payments: Decimal,
}

impl ContributionCap {
    /// Returns the maximum taxable gross in USD.
    pub fn max_taxable_gross(&self) -> Decimal {
        self.monthly_ceiling_local / self.local_per_usd * self.statutory_payments
    }
}

/// Fee configuration loaded from `fees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeesConfig {
    /// Employer-side EOR rates.
    pub eor_employer: EorEmployerRates,
    /// Worker-side EOR rates.
    pub eor_worker: EorWorkerRates,
    /// AOR fees and defaults.
    pub aor: AorFees,
    /// The employee-contribution cap.
    pub contribution_cap: ContributionCap,
}

/// The progressive income-tax lookup table loaded from `income_tax.yaml`.
///
/// The table is defined only at fixed increments of `bracket_size` between
/// its smallest and largest keys. Lookup clamps rather than interpolating:
/// below the smallest bracket the rate is zero, above the largest it is the
/// fixed ceiling rate. This is a deliberate simplification versus marginal
/// bracket taxation.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomeTaxTable {
    /// The bracket increment (e.g., 5000).
    pub bracket_size: Decimal,
    /// The flat rate applied above the largest bracket.
    pub ceiling_rate_percent: Decimal,
    /// Rate percentages keyed by rounded gross income.
    pub rates: BTreeMap<u64, Decimal>,
}

impl IncomeTaxTable {
    /// Returns the smallest gross income the table is defined for.
    pub fn min_bracket(&self) -> Decimal {
        self.rates
            .keys()
            .next()
            .map(|k| Decimal::from(*k))
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the largest gross income the table is defined for.
    pub fn max_bracket(&self) -> Decimal {
        self.rates
            .keys()
            .next_back()
            .map(|k| Decimal::from(*k))
            .unwrap_or(Decimal::ZERO)
    }

    /// Looks up the rate for a gross income already rounded to the nearest
    /// bracket.
    ///
    /// Values below the smallest bracket yield zero; values above the
    /// largest yield the ceiling rate; in-range values read the nearest
    /// table entry at or below the rounded gross.
    pub fn rate_for_rounded_gross(&self, rounded_gross: Decimal) -> Decimal {
        if rounded_gross < self.min_bracket() {
            return Decimal::ZERO;
        }
        if rounded_gross > self.max_bracket() {
            return self.ceiling_rate_percent;
        }

        let key = rounded_gross.trunc().to_u64().unwrap_or(0);
        self.rates
            .range(..=key)
            .next_back()
            .map(|(_, rate)| *rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Validates the table shape: non-empty, positive bracket size, and
    /// keys ascending in steps of exactly `bracket_size`.
    fn validate(&self) -> EngineResult<()> {
        if self.bracket_size <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: "income_tax".to_string(),
                message: "bracket_size must be positive".to_string(),
            });
        }
        if self.rates.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: "income_tax".to_string(),
                message: "rate table cannot be empty".to_string(),
            });
        }

        let mut previous: Option<u64> = None;
        for key in self.rates.keys() {
            if let Some(prev) = previous {
                let step = Decimal::from(key - prev);
                if step != self.bracket_size {
                    return Err(EngineError::ConfigParseError {
                        path: "income_tax".to_string(),
                        message: format!(
                            "rate table keys must ascend in steps of {}, found gap between {} and {}",
                            self.bracket_size, prev, key
                        ),
                    });
                }
            }
            previous = Some(*key);
        }

        Ok(())
    }
}

/// The complete fee/tax schedule for one jurisdiction.
///
/// This struct aggregates the configuration loaded from the YAML files in a
/// schedule directory and is the single injectable dependency of the
/// breakdown engine.
#[derive(Debug, Clone)]
pub struct FeeSchedule {
    /// Schedule metadata.
    metadata: ScheduleMetadata,
    /// Fee percentages and caps.
    fees: FeesConfig,
    /// The income-tax lookup table.
    income_tax: IncomeTaxTable,
}

impl FeeSchedule {
    /// Creates a new FeeSchedule from its component parts, validating the
    /// income-tax table shape.
    pub fn new(
        metadata: ScheduleMetadata,
        fees: FeesConfig,
        income_tax: IncomeTaxTable,
    ) -> EngineResult<Self> {
        income_tax.validate()?;
        Ok(Self {
            metadata,
            fees,
            income_tax,
        })
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the employer-side EOR rates.
    pub fn eor_employer(&self) -> &EorEmployerRates {
        &self.fees.eor_employer
    }

    /// Returns the worker-side EOR rates.
    pub fn eor_worker(&self) -> &EorWorkerRates {
        &self.fees.eor_worker
    }

    /// Returns the AOR fees and defaults.
    pub fn aor(&self) -> &AorFees {
        &self.fees.aor
    }

    /// Returns the maximum taxable gross for worker-side contributions.
    pub fn max_taxable_gross(&self) -> Decimal {
        self.fees.contribution_cap.max_taxable_gross()
    }

    /// Returns the income-tax lookup table.
    pub fn income_tax(&self) -> &IncomeTaxTable {
        &self.income_tax
    }
}
