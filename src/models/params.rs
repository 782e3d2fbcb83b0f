//! Computation parameters and equity grant models.
//!
//! This module defines the [`Params`] value object and the [`EquityGrant`]
//! type with its tagged [`GrantValuation`] variants. Both are validated at
//! construction so that invalid combinations are unrepresentable.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// How an equity grant's cash-equivalent value is expressed.
///
/// # Example
///
/// ```
/// use salary_engine::models::GrantValuation;
/// use rust_decimal::Decimal;
///
/// let valuation = GrantValuation::DollarBased {
///     dollar_value: Decimal::from(50_000),
/// };
/// assert_eq!(format!("{:?}", valuation), "DollarBased { dollar_value: 50000 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GrantValuation {
    /// A number of units, each carrying a fair value.
    UnitBased {
        /// The number of granted units.
        unit_count: Decimal,
        /// The fair value of a single unit.
        unit_fair_value: Decimal,
    },
    /// A grant expressed directly as a dollar amount.
    DollarBased {
        /// The total dollar value of the grant.
        dollar_value: Decimal,
    },
}

/// An equity grant vesting in equal annual installments.
///
/// The grant's value is recognized identically in years
/// `1..=vesting_period_years` and contributes zero thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EquityGrant {
    /// How the grant's value is expressed.
    #[serde(flatten)]
    valuation: GrantValuation,
    /// The number of years over which the grant vests.
    vesting_period_years: u32,
}

impl EquityGrant {
    /// Creates a new equity grant, validating its fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGrant`] if the vesting period is zero
    /// or any monetary component is negative. Invalid grants are rejected
    /// outright rather than clamped, since clamping would silently
    /// misrepresent compensation.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::models::{EquityGrant, GrantValuation};
    /// use rust_decimal::Decimal;
    ///
    /// let grant = EquityGrant::new(
    ///     GrantValuation::UnitBased {
    ///         unit_count: Decimal::from(1_000),
    ///         unit_fair_value: Decimal::from(50),
    ///     },
    ///     4,
    /// )
    /// .unwrap();
    /// assert_eq!(grant.grant_value(), Decimal::from(50_000));
    /// assert_eq!(grant.annual_installment(), Decimal::from(12_500));
    /// ```
    pub fn new(valuation: GrantValuation, vesting_period_years: u32) -> EngineResult<Self> {
        if vesting_period_years == 0 {
            return Err(EngineError::InvalidGrant {
                message: "vesting period must be at least 1 year".to_string(),
            });
        }

        match &valuation {
            GrantValuation::UnitBased {
                unit_count,
                unit_fair_value,
            } => {
                if unit_count.is_sign_negative() {
                    return Err(EngineError::InvalidGrant {
                        message: "unit count cannot be negative".to_string(),
                    });
                }
                if unit_fair_value.is_sign_negative() {
                    return Err(EngineError::InvalidGrant {
                        message: "unit fair value cannot be negative".to_string(),
                    });
                }
            }
            GrantValuation::DollarBased { dollar_value } => {
                if dollar_value.is_sign_negative() {
                    return Err(EngineError::InvalidGrant {
                        message: "dollar value cannot be negative".to_string(),
                    });
                }
            }
        }

        Ok(Self {
            valuation,
            vesting_period_years,
        })
    }

    /// Creates a unit-based grant.
    pub fn unit_based(
        unit_count: Decimal,
        unit_fair_value: Decimal,
        vesting_period_years: u32,
    ) -> EngineResult<Self> {
        Self::new(
            GrantValuation::UnitBased {
                unit_count,
                unit_fair_value,
            },
            vesting_period_years,
        )
    }

    /// Creates a dollar-based grant.
    pub fn dollar_based(dollar_value: Decimal, vesting_period_years: u32) -> EngineResult<Self> {
        Self::new(GrantValuation::DollarBased { dollar_value }, vesting_period_years)
    }

    /// Returns how the grant's value is expressed.
    pub fn valuation(&self) -> &GrantValuation {
        &self.valuation
    }

    /// Returns the number of years over which the grant vests.
    pub fn vesting_period_years(&self) -> u32 {
        self.vesting_period_years
    }

    /// Returns the total cash-equivalent value of the grant.
    pub fn grant_value(&self) -> Decimal {
        match &self.valuation {
            GrantValuation::UnitBased {
                unit_count,
                unit_fair_value,
            } => unit_count * unit_fair_value,
            GrantValuation::DollarBased { dollar_value } => *dollar_value,
        }
    }

    /// Returns the value vesting in each year of the vesting period.
    pub fn annual_installment(&self) -> Decimal {
        self.grant_value() / Decimal::from(self.vesting_period_years)
    }
}

/// The immutable parameter set for one computation.
///
/// Constructed fresh for every computation; validated once at construction
/// and never mutated afterwards.
///
/// # Example
///
/// ```
/// use salary_engine::models::Params;
/// use rust_decimal::Decimal;
///
/// let params = Params::new(
///     Decimal::from(100_000),
///     Decimal::from(100),
///     Some(Decimal::from(15)),
///     vec![],
/// )
/// .unwrap();
/// assert_eq!(params.annual_gross_salary(), Decimal::from(100_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Params {
    /// The gross annual salary in USD.
    annual_gross_salary: Decimal,
    /// The monthly private health top-up, paid for the worker in every scenario.
    monthly_health_contribution: Decimal,
    /// The simplified tax-regime rate for the AOR worker scenario (0-100).
    /// When absent, the schedule's default rate applies.
    contractor_tax_rate_percent: Option<Decimal>,
    /// The equity grants vesting over the computation horizon.
    equity_grants: Vec<EquityGrant>,
}

impl Params {
    /// Creates a new parameter set, validating every scalar field.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParam`] for a negative salary or health
    /// contribution, or a contractor tax rate outside `[0, 100]`.
    pub fn new(
        annual_gross_salary: Decimal,
        monthly_health_contribution: Decimal,
        contractor_tax_rate_percent: Option<Decimal>,
        equity_grants: Vec<EquityGrant>,
    ) -> EngineResult<Self> {
        if annual_gross_salary.is_sign_negative() {
            return Err(EngineError::InvalidParam {
                field: "annual_gross_salary".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if monthly_health_contribution.is_sign_negative() {
            return Err(EngineError::InvalidParam {
                field: "monthly_health_contribution".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        if let Some(rate) = contractor_tax_rate_percent {
            if rate.is_sign_negative() || rate > Decimal::from(100) {
                return Err(EngineError::InvalidParam {
                    field: "contractor_tax_rate_percent".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }

        Ok(Self {
            annual_gross_salary,
            monthly_health_contribution,
            contractor_tax_rate_percent,
            equity_grants,
        })
    }

    /// Returns the gross annual salary.
    pub fn annual_gross_salary(&self) -> Decimal {
        self.annual_gross_salary
    }

    /// Returns the monthly private health contribution.
    pub fn monthly_health_contribution(&self) -> Decimal {
        self.monthly_health_contribution
    }

    /// Returns the contractor tax rate percentage, when one was provided.
    pub fn contractor_tax_rate_percent(&self) -> Option<Decimal> {
        self.contractor_tax_rate_percent
    }

    /// Returns the equity grants.
    pub fn equity_grants(&self) -> &[EquityGrant] {
        &self.equity_grants
    }
}

impl Default for Params {
    /// The documented defaults: $100,000 salary, $100/month private health,
    /// no explicit contractor tax rate (the schedule default applies), no
    /// equity grants.
    fn default() -> Self {
        Self {
            annual_gross_salary: Decimal::from(100_000),
            monthly_health_contribution: Decimal::from(100),
            contractor_tax_rate_percent: None,
            equity_grants: Vec::new(),
        }
    }
}
