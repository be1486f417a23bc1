//! Defines the `EstimatorParameters` struct, which represents the contents of `estimator.toml`.
use crate::efficiency::CalibrationBounds;
use crate::geometry::UnitSystem;
use crate::input::{input_err_msg, read_toml};
use crate::units::Dimensionless;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

const ESTIMATOR_PARAMETERS_FILE_NAME: &str = "estimator.toml";

/// Default weight given to the normalised cooling load in the loss score
fn default_cooling_weight() -> Dimensionless {
    Dimensionless(0.9)
}

/// Default number of years to project maintenance costs over
fn default_maintenance_horizon() -> u32 {
    10
}

/// Represents the contents of the entire estimator parameters file.
#[derive(PartialEq, Clone, Debug, Deserialize)]
pub struct EstimatorParameters {
    /// Calibration bounds for load normalisation
    pub calibration: CalibrationBounds,
    /// Weight given to the normalised cooling load; heating gets the complement.
    ///
    /// Cooling dominates overall load in the target climate, hence the default of 0.9.
    #[serde(default = "default_cooling_weight")]
    pub cooling_weight: Dimensionless,
    /// The unit system the load predictors expect their features in
    #[serde(default)]
    pub unit_system: UnitSystem,
    /// Number of years to project maintenance costs over
    #[serde(default = "default_maintenance_horizon")]
    pub maintenance_horizon_years: u32,
}

/// Check that the `cooling_weight` parameter is valid
fn check_cooling_weight(value: Dimensionless) -> Result<()> {
    ensure!(
        value.is_finite() && Dimensionless(0.0) < value && value <= Dimensionless(1.0),
        "cooling_weight must be greater than zero and at most one"
    );

    Ok(())
}

/// Check that the `maintenance_horizon_years` parameter is valid
fn check_maintenance_horizon(value: u32) -> Result<()> {
    ensure!(value > 0, "maintenance_horizon_years cannot be zero");

    Ok(())
}

impl EstimatorParameters {
    /// Read a parameters file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `model_dir` - Folder containing model configuration files
    ///
    /// # Returns
    ///
    /// The file contents as an [`EstimatorParameters`] struct or an error if the file is invalid
    pub fn from_path<P: AsRef<Path>>(model_dir: P) -> Result<EstimatorParameters> {
        let file_path = model_dir.as_ref().join(ESTIMATOR_PARAMETERS_FILE_NAME);
        let parameters: EstimatorParameters = read_toml(&file_path)?;

        parameters
            .validate()
            .with_context(|| input_err_msg(file_path))?;

        Ok(parameters)
    }

    /// Validate parameters after reading in file
    fn validate(&self) -> Result<()> {
        // calibration
        self.calibration.validate()?;

        // cooling_weight
        check_cooling_weight(self.cooling_weight)?;

        // maintenance_horizon_years
        check_maintenance_horizon(self.maintenance_horizon_years)?;

        Ok(())
    }
}
