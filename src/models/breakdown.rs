//! Breakdown output models for the compensation engine.
//!
//! This module contains the [`Scenario`] taxonomy and the [`Breakdown`] and
//! [`YearlyDatum`] structures that capture all outputs of a computation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The engagement model under which a worker is hired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryModel {
    /// Employer-of-Record: the employer bears the full statutory payroll burden.
    Eor,
    /// Agent-of-Record: a contractor agency model with a flat platform fee.
    Aor,
}

/// Which side of a scenario a breakdown represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// The party paying for the engagement.
    Employer,
    /// The party receiving income from the engagement.
    Worker,
}

/// An ordered pair of engagement model and persona.
///
/// Exactly four scenarios exist and are fixed; [`Scenario::ALL`] lists them
/// in their canonical order.
///
/// # Example
///
/// ```
/// use salary_engine::models::Scenario;
///
/// assert_eq!(Scenario::ALL.len(), 4);
/// assert_eq!(Scenario::EorEmployer.to_string(), "eor-employer");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Total employer cost under the EOR model.
    EorEmployer,
    /// Worker net salary under the EOR model.
    EorWorker,
    /// Total employer cost under the AOR model.
    AorEmployer,
    /// Contractor net income under the AOR model.
    AorWorker,
}

impl Scenario {
    /// All four scenarios in canonical order.
    pub const ALL: [Scenario; 4] = [
        Scenario::EorEmployer,
        Scenario::EorWorker,
        Scenario::AorEmployer,
        Scenario::AorWorker,
    ];

    /// Returns the engagement model of this scenario.
    pub fn model(&self) -> SalaryModel {
        match self {
            Scenario::EorEmployer | Scenario::EorWorker => SalaryModel::Eor,
            Scenario::AorEmployer | Scenario::AorWorker => SalaryModel::Aor,
        }
    }

    /// Returns the persona of this scenario.
    pub fn persona(&self) -> Persona {
        match self {
            Scenario::EorEmployer | Scenario::AorEmployer => Persona::Employer,
            Scenario::EorWorker | Scenario::AorWorker => Persona::Worker,
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Scenario::EorEmployer => "eor-employer",
            Scenario::EorWorker => "eor-worker",
            Scenario::AorEmployer => "aor-employer",
            Scenario::AorWorker => "aor-worker",
        };
        f.write_str(s)
    }
}

/// A single line item in a breakdown.
///
/// The value may be negative to represent a deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    /// The human-readable label, with the applicable percentage embedded
    /// where one applies.
    pub label: String,
    /// The monetary value of this item.
    pub value: Decimal,
}

impl BreakdownItem {
    /// Creates a new breakdown item.
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// The itemized cost or income breakdown for one scenario in one year.
///
/// The items enumerate, in order: base salary, vested equity (only when
/// nonzero), the statutory 13th salary (EOR scenarios only), each
/// contribution/deduction/fee, and a terminal line whose value equals
/// [`Breakdown::total`]. The total always equals the algebraic sum of every
/// item before the terminal line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// The scenario this breakdown describes.
    pub scenario: Scenario,
    /// A short human-readable title.
    pub title: String,
    /// A one-line description of what the total represents.
    pub description: String,
    /// Citation URLs for the rates used. Stored and forwarded verbatim,
    /// never dereferenced.
    pub sources: Vec<String>,
    /// The ordered line items.
    pub items: Vec<BreakdownItem>,
    /// The scenario total.
    pub total: Decimal,
}

/// The four scenario totals for one engagement model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTotals {
    /// The employer-side total.
    pub employer: Decimal,
    /// The worker-side total.
    pub worker: Decimal,
}

/// The four scenario totals for one year of the vesting horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyDatum {
    /// The 1-based year within the horizon.
    pub year: u32,
    /// EOR employer and worker totals.
    pub eor: ModelTotals,
    /// AOR employer and worker totals.
    pub aor: ModelTotals,
}
