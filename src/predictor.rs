//! Load predictors: opaque models mapping a feature vector to an energy load.
//!
//! The pipeline only sees the [`LoadPredictor`] trait, so predictors can be swapped per model
//! directory and stubbed out in tests. The shipped implementation is a linear regression whose
//! coefficients are read from a TOML file, one per feature-vector field.
use crate::features::{FIELD_NAMES, FeatureVector};
use crate::units::KilowattHours;
use anyhow::{Context, Result, ensure};
use log::warn;
use serde::Deserialize;
use std::collections::HashMap;

/// Which of the two loads a predictor estimates
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LoadType {
    /// Energy removed to keep the house cool
    Cooling,
    /// Energy added to keep the house warm
    Heating,
}

impl std::fmt::Display for LoadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadType::Cooling => write!(f, "cooling"),
            LoadType::Heating => write!(f, "heating"),
        }
    }
}

/// A model which predicts an energy load from a feature vector.
///
/// Implementations are black boxes to the pipeline: one call per load type, no retries. A failed
/// prediction halts the current request.
pub trait LoadPredictor {
    /// Predict the load for the given feature vector.
    fn predict(&self, features: &FeatureVector) -> Result<KilowattHours>;
}

/// A linear regression model over the feature vector
#[derive(PartialEq, Clone, Debug, Deserialize)]
pub struct LinearModel {
    /// The constant term
    pub intercept: f64,
    /// One coefficient per feature-vector field, keyed by field name
    pub coefficients: HashMap<String, f64>,
}

impl LinearModel {
    /// Check that the coefficients exactly cover the feature-vector contract.
    ///
    /// A missing or unknown coefficient name means the model was trained against a different
    /// feature set and would silently produce wrong loads.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.intercept.is_finite(), "Intercept must be a finite number");

        for name in FIELD_NAMES {
            let coefficient = self
                .coefficients
                .get(name)
                .with_context(|| format!("Missing coefficient for feature '{name}'"))?;
            ensure!(
                coefficient.is_finite(),
                "Coefficient for feature '{name}' must be a finite number"
            );
        }

        for name in self.coefficients.keys() {
            ensure!(
                FIELD_NAMES.contains(&name.as_str()),
                "Unknown feature '{name}' in coefficients"
            );
        }

        Ok(())
    }
}

impl LoadPredictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<KilowattHours> {
        let mut load = self.intercept;
        for (name, value) in features.fields() {
            // validate() has checked that every field has a coefficient
            load += self.coefficients[name] * value;
        }

        ensure!(load.is_finite(), "Predicted load is not a finite number");

        if load < 0.0 {
            warn!("Predicted load {load:.2} kWh is negative; clamping to zero");
            load = 0.0;
        }

        Ok(KilowattHours(load))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, features, linear_model};
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    fn test_linear_model_valid(linear_model: LinearModel) {
        assert!(linear_model.validate().is_ok());
    }

    #[rstest]
    fn test_linear_model_missing_coefficient(mut linear_model: LinearModel) {
        linear_model.coefficients.remove("Area");
        assert_error!(
            linear_model.validate(),
            "Missing coefficient for feature 'Area'"
        );
    }

    #[rstest]
    fn test_linear_model_unknown_coefficient(mut linear_model: LinearModel) {
        linear_model.coefficients.insert("Roof_Pitch".into(), 1.0);
        assert_error!(
            linear_model.validate(),
            "Unknown feature 'Roof_Pitch' in coefficients"
        );
    }

    #[rstest]
    fn test_predict(linear_model: LinearModel, features: FeatureVector) {
        // The fixture model has intercept 1 and a coefficient of 0.1 on Area only
        let load = linear_model.predict(&features).unwrap();
        assert_approx_eq!(KilowattHours, load, KilowattHours(1.0 + 0.1 * features.area));
    }

    #[rstest]
    fn test_predict_clamps_negative(mut linear_model: LinearModel, features: FeatureVector) {
        linear_model.intercept = -1e6;
        let load = linear_model.predict(&features).unwrap();
        assert_eq!(load, KilowattHours(0.0));
    }

    #[rstest]
    fn test_predict_non_finite(mut linear_model: LinearModel, features: FeatureVector) {
        linear_model
            .coefficients
            .insert("Area".into(), f64::INFINITY);
        assert_error!(
            linear_model.predict(&features),
            "Predicted load is not a finite number"
        );
    }
}
