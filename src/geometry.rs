//! Deriving floor area, volume, surface area and form factor from house dimensions.
use crate::house::HouseSpec;
use crate::units::{CubicMetres, Dimensionless, Metres, SquareMetres};
use anyhow::{Result, ensure};
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};

/// Feet per metre, for models whose predictors were trained on imperial-unit features
const METRES_TO_FEET: f64 = 3.2808;

/// The unit system the load predictors expect their features in.
///
/// Exactly one convention applies per model directory. Dimensions in house spec files are always
/// metric; for a `feet` model each linear dimension is scaled before features are derived, so
/// areas scale by 10.764.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum UnitSystem {
    /// Features are derived from dimensions in metres
    #[default]
    #[string = "metres"]
    Metres,
    /// Linear dimensions are converted to feet before features are derived
    #[string = "feet"]
    Feet,
}

impl UnitSystem {
    /// The factor applied to each linear dimension before deriving features
    pub fn linear_scale(&self) -> Dimensionless {
        match self {
            UnitSystem::Metres => Dimensionless(1.0),
            UnitSystem::Feet => Dimensionless(METRES_TO_FEET),
        }
    }
}

/// Geometric quantities derived from house dimensions
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct HouseGeometry {
    /// Floor area (length x width)
    pub area: SquareMetres,
    /// Enclosed volume
    pub volume: CubicMetres,
    /// Total surface area of the bounding box
    pub surface_area: SquareMetres,
}

impl HouseGeometry {
    /// Derive geometry from the given dimensions.
    ///
    /// # Arguments
    ///
    /// * `length`, `width`, `height` - House dimensions, already scaled to the model's unit system
    ///
    /// # Returns
    ///
    /// The derived geometry, or an error if any dimension is not a positive number.
    pub fn from_dimensions(length: Metres, width: Metres, height: Metres) -> Result<HouseGeometry> {
        ensure!(
            [length, width, height]
                .iter()
                .all(|dim| dim.is_finite() && *dim > Metres(0.0)),
            "Length, width and height must all be greater than zero"
        );

        let area = length * width;
        Ok(HouseGeometry {
            area,
            volume: area * height,
            surface_area: Dimensionless(2.0)
                * (length * width + length * height + width * height),
        })
    }

    /// Derive geometry for a house spec, applying the model's unit system.
    pub fn from_spec(spec: &HouseSpec, unit_system: UnitSystem) -> Result<HouseGeometry> {
        let scale = unit_system.linear_scale();
        Self::from_dimensions(spec.length * scale, spec.width * scale, spec.height * scale)
    }

    /// The volume-to-surface-area ratio, a proxy for compactness.
    ///
    /// No rounding is applied; full precision is retained for the feature vector.
    pub fn form_factor(&self) -> Dimensionless {
        Dimensionless(self.volume.value() / self.surface_area.value())
    }
}
