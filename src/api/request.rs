//! Request types for the compensation engine API.
//!
//! This module defines the JSON request structures for the `/breakdowns`
//! and `/series` endpoints. Request types carry unvalidated data; converting
//! them into domain types runs the constructors' validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EquityGrant, Params};

/// Request body for the `/breakdowns` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownRequest {
    /// The computation parameters.
    pub params: ParamsRequest,
    /// The 1-based year of the horizon to compute.
    pub year: u32,
}

/// Request body for the `/series` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// The computation parameters.
    pub params: ParamsRequest,
}

/// Computation parameters in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamsRequest {
    /// The gross annual salary in USD.
    pub annual_gross_salary: Decimal,
    /// The monthly private health contribution.
    pub monthly_health_contribution: Decimal,
    /// Optional contractor tax rate; the schedule default applies when absent.
    #[serde(default)]
    pub contractor_tax_rate_percent: Option<Decimal>,
    /// Equity grants vesting over the horizon.
    #[serde(default)]
    pub equity_grants: Vec<GrantRequest>,
}

/// One equity grant in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GrantRequest {
    /// A unit-based grant.
    UnitBased {
        /// The number of granted units.
        unit_count: Decimal,
        /// The fair value of a single unit.
        unit_fair_value: Decimal,
        /// The number of years over which the grant vests.
        vesting_period_years: u32,
    },
    /// A dollar-based grant.
    DollarBased {
        /// The total dollar value of the grant.
        dollar_value: Decimal,
        /// The number of years over which the grant vests.
        vesting_period_years: u32,
    },
}

impl TryFrom<GrantRequest> for EquityGrant {
    type Error = EngineError;

    fn try_from(req: GrantRequest) -> Result<Self, Self::Error> {
        match req {
            GrantRequest::UnitBased {
                unit_count,
                unit_fair_value,
                vesting_period_years,
            } => EquityGrant::unit_based(unit_count, unit_fair_value, vesting_period_years),
            GrantRequest::DollarBased {
                dollar_value,
                vesting_period_years,
            } => EquityGrant::dollar_based(dollar_value, vesting_period_years),
        }
    }
}

impl TryFrom<ParamsRequest> for Params {
    type Error = EngineError;

    fn try_from(req: ParamsRequest) -> Result<Self, Self::Error> {
        let grants = req
            .equity_grants
            .into_iter()
            .map(EquityGrant::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Params::new(
            req.annual_gross_salary,
            req.monthly_health_contribution,
            req.contractor_tax_rate_percent,
            grants,
        )
    }
}
