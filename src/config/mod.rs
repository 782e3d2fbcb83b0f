//! Configuration loading and management for the compensation engine.
//!
//! This module provides functionality to load a jurisdiction's fee/tax
//! schedule from YAML files, including schedule metadata, fee percentages,
//! the employee-contribution cap, and the income-tax lookup table.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/argentina").unwrap();
//! println!("Loaded schedule: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AorFees, ContributionCap, EorEmployerRates, EorWorkerRates, FeeSchedule, FeesConfig,
    IncomeTaxTable, ScheduleMetadata,
};
