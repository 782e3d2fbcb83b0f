//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading fee/tax
//! schedules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{FeeSchedule, FeesConfig, IncomeTaxTable, ScheduleMetadata};

/// Loads and provides access to a jurisdiction's fee schedule.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides access to the aggregated [`FeeSchedule`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/argentina/
/// ├── schedule.yaml    # Schedule metadata
/// ├── fees.yaml        # Fee percentages, AOR fees, contribution cap
/// └── income_tax.yaml  # Progressive income-tax lookup table
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/argentina").unwrap();
///
/// println!("Schedule: {}", loader.metadata().name);
/// println!("Max taxable gross: ${}", loader.schedule().max_taxable_gross());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    schedule: FeeSchedule,
}

impl ConfigLoader {
    /// Loads a fee schedule from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/argentina")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The income-tax table has gaps or is empty
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/argentina")?;
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata_path = path.join("schedule.yaml");
        let metadata = Self::load_yaml::<ScheduleMetadata>(&metadata_path)?;

        let fees_path = path.join("fees.yaml");
        let fees = Self::load_yaml::<FeesConfig>(&fees_path)?;

        let income_tax_path = path.join("income_tax.yaml");
        let income_tax = Self::load_yaml::<IncomeTaxTable>(&income_tax_path)?;

        let schedule = FeeSchedule::new(metadata, fees, income_tax)?;

        Ok(Self { schedule })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded fee schedule.
    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        self.schedule.metadata()
    }
}
