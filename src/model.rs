//! Code for estimator models: a directory of configuration and reference data.
use crate::input::house::{HouseRecord, read_houses};
use crate::input::material::read_materials;
use crate::input::predictor::read_predictor;
use crate::material::MaterialMap;
use crate::predictor::{LinearModel, LoadType};
use anyhow::Result;
use log::info;
use std::path::Path;

pub mod parameters;
pub use parameters::EstimatorParameters;

/// An estimator model: parameters, reference tables and the two load predictors.
///
/// Loaded once at startup; everything here is read-only for the lifetime of the process.
pub struct EstimatorModel {
    /// Calibration bounds and other parameters from `estimator.toml`
    pub parameters: EstimatorParameters,
    /// The insulation materials reference table
    pub materials: MaterialMap,
    /// The historical houses dataset (context only; the pipeline does not read it)
    pub houses: Vec<HouseRecord>,
    /// Predictor for the cooling load
    pub cooling_predictor: LinearModel,
    /// Predictor for the heating load
    pub heating_predictor: LinearModel,
}

impl EstimatorModel {
    /// Read a model from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `model_dir` - Folder containing model configuration files
    ///
    /// # Returns
    ///
    /// The loaded model, or an error if any file is missing or invalid. Any failure here is
    /// fatal: the pipeline cannot run against a partial model.
    pub fn from_path<P: AsRef<Path>>(model_dir: P) -> Result<EstimatorModel> {
        let model_dir = model_dir.as_ref();
        let parameters = EstimatorParameters::from_path(model_dir)?;
        let materials = read_materials(model_dir)?;
        let houses = read_houses(model_dir)?;
        let cooling_predictor = read_predictor(model_dir, LoadType::Cooling)?;
        let heating_predictor = read_predictor(model_dir, LoadType::Heating)?;

        info!(
            "Loaded estimator model with {} materials ({:?} units)",
            materials.len(),
            parameters.unit_system
        );

        Ok(EstimatorModel {
            parameters,
            materials,
            houses,
            cooling_predictor,
            heating_predictor,
        })
    }
}
