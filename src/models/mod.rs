//! Core data models for the compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod params;

pub use breakdown::{
    Breakdown, BreakdownItem, ModelTotals, Persona, SalaryModel, Scenario, YearlyDatum,
};
pub use params::{EquityGrant, GrantValuation, Params};
