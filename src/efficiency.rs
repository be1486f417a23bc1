//! Normalising predicted loads into a single loss score.
use crate::units::{Dimensionless, KilowattHours};
use anyhow::{Result, ensure};
use serde::Deserialize;

/// Calibration bounds for load normalisation.
///
/// These are fixed per model directory, derived from the historical dataset the predictors were
/// trained on. They are configuration, never computed at runtime: a prediction outside the bounds
/// is not flagged, it simply saturates the score.
#[derive(PartialEq, Clone, Copy, Debug, Deserialize)]
pub struct CalibrationBounds {
    /// Smallest cooling load in the calibration data
    pub min_cooling_load: KilowattHours,
    /// Largest cooling load in the calibration data
    pub max_cooling_load: KilowattHours,
    /// Smallest heating load in the calibration data
    pub min_heating_load: KilowattHours,
    /// Largest heating load in the calibration data
    pub max_heating_load: KilowattHours,
}

impl CalibrationBounds {
    /// Check that the bounds can normalise loads.
    ///
    /// Equal min and max would divide by zero, so this is a fatal misconfiguration, caught when
    /// the model directory is loaded.
    pub fn validate(&self) -> Result<()> {
        for (name, min, max) in [
            ("cooling", self.min_cooling_load, self.max_cooling_load),
            ("heating", self.min_heating_load, self.max_heating_load),
        ] {
            ensure!(
                min.is_finite() && max.is_finite(),
                "Calibration bounds for {name} load must be finite numbers"
            );
            ensure!(
                max > min,
                "Calibration max {name} load must be greater than min"
            );
        }

        Ok(())
    }

    fn normalised_cooling(&self, load: KilowattHours) -> Dimensionless {
        (load - self.min_cooling_load) / (self.max_cooling_load - self.min_cooling_load)
    }

    fn normalised_heating(&self, load: KilowattHours) -> Dimensionless {
        (load - self.min_heating_load) / (self.max_heating_load - self.min_heating_load)
    }
}

/// Compute the loss score for a pair of predicted loads.
///
/// Each load is normalised against the calibration bounds, the two are combined with the given
/// cooling weight (heating gets the complement) and the result is expressed as a loss percentage:
/// 0 is perfectly efficient, 100 the least efficient. The clamp to [0, 100] is the sole safeguard
/// against predictions outside the calibration range.
pub fn loss_score(
    bounds: &CalibrationBounds,
    cooling_weight: Dimensionless,
    cooling_load: KilowattHours,
    heating_load: KilowattHours,
) -> Dimensionless {
    let heating_weight = Dimensionless(1.0) - cooling_weight;
    let weighted = cooling_weight * bounds.normalised_cooling(cooling_load)
        + heating_weight * bounds.normalised_heating(heating_load);
    let efficiency = (Dimensionless(100.0) * (Dimensionless(1.0) - weighted)).clamp(0.0, 100.0);

    Dimensionless(100.0) - efficiency
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, calibration_bounds};
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    const COOLING_WEIGHT: Dimensionless = Dimensionless(0.9);

    #[rstest]
    fn test_calibration_bounds_valid(calibration_bounds: CalibrationBounds) {
        assert!(calibration_bounds.validate().is_ok());
    }

    #[rstest]
    fn test_calibration_bounds_degenerate(calibration_bounds: CalibrationBounds) {
        let bounds = CalibrationBounds {
            min_heating_load: calibration_bounds.max_heating_load,
            ..calibration_bounds
        };
        assert_error!(
            bounds.validate(),
            "Calibration max heating load must be greater than min"
        );
    }

    #[rstest]
    fn test_calibration_bounds_non_finite(calibration_bounds: CalibrationBounds) {
        let bounds = CalibrationBounds {
            max_cooling_load: KilowattHours(f64::NAN),
            ..calibration_bounds
        };
        assert_error!(
            bounds.validate(),
            "Calibration bounds for cooling load must be finite numbers"
        );
    }

    /// Loads at the calibration minima give a loss of zero
    #[rstest]
    fn test_loss_at_minima(calibration_bounds: CalibrationBounds) {
        let loss = loss_score(
            &calibration_bounds,
            COOLING_WEIGHT,
            calibration_bounds.min_cooling_load,
            calibration_bounds.min_heating_load,
        );
        assert_approx_eq!(Dimensionless, loss, Dimensionless(0.0));
    }

    /// Loads at the calibration maxima give a loss of 100
    #[rstest]
    fn test_loss_at_maxima(calibration_bounds: CalibrationBounds) {
        let loss = loss_score(
            &calibration_bounds,
            COOLING_WEIGHT,
            calibration_bounds.max_cooling_load,
            calibration_bounds.max_heating_load,
        );
        assert_approx_eq!(Dimensionless, loss, Dimensionless(100.0));
    }

    /// Out-of-range predictions saturate rather than escaping [0, 100]
    #[rstest]
    fn test_loss_saturates(calibration_bounds: CalibrationBounds) {
        let loss = loss_score(
            &calibration_bounds,
            COOLING_WEIGHT,
            calibration_bounds.max_cooling_load + KilowattHours(1000.0),
            calibration_bounds.max_heating_load,
        );
        assert_approx_eq!(Dimensionless, loss, Dimensionless(100.0));

        let loss = loss_score(
            &calibration_bounds,
            COOLING_WEIGHT,
            calibration_bounds.min_cooling_load - KilowattHours(1000.0),
            calibration_bounds.min_heating_load,
        );
        assert_approx_eq!(Dimensionless, loss, Dimensionless(0.0));
    }

    /// Loss is monotonically non-decreasing in the cooling load with heating fixed
    #[rstest]
    fn test_loss_monotone_in_cooling(calibration_bounds: CalibrationBounds) {
        let heating = calibration_bounds.min_heating_load;
        let mut previous = Dimensionless(-1.0);
        for step in 0..=10 {
            let cooling = calibration_bounds.min_cooling_load
                + Dimensionless(step as f64 / 10.0)
                    * (calibration_bounds.max_cooling_load - calibration_bounds.min_cooling_load);
            let loss = loss_score(&calibration_bounds, COOLING_WEIGHT, cooling, heating);
            assert!(loss >= previous);
            previous = loss;
        }
    }
}
