//! Encoding a house spec into the feature vector consumed by the load predictors.
//!
//! The field set, names and order are a contract with the predictors: they were trained against
//! exactly these columns and a mismatch produces silently wrong loads rather than an error.
use crate::geometry::{HouseGeometry, UnitSystem};
use crate::house::{HouseSpec, Shape};
use anyhow::{Result, bail};
use serde::Serialize;

/// The ordered field names of the feature vector, as the predictors were trained on them
pub const FIELD_NAMES: [&str; 12] = [
    "Width",
    "Length",
    "Height",
    "Area",
    "Window_Ratio",
    "Skylight_Ratio",
    "Orientation",
    "Form_Factor",
    "Shape_Box",
    "Shape_L",
    "Shape_O",
    "Shape_U",
];

/// The fixed feature vector passed to the load predictors
#[derive(PartialEq, Clone, Debug, Serialize)]
pub struct FeatureVector {
    /// Width of the house, in the model's unit system
    #[serde(rename = "Width")]
    pub width: f64,
    /// Length of the house, in the model's unit system
    #[serde(rename = "Length")]
    pub length: f64,
    /// Height of the house, in the model's unit system
    #[serde(rename = "Height")]
    pub height: f64,
    /// Floor area
    #[serde(rename = "Area")]
    pub area: f64,
    /// Window-to-wall ratio as a fraction
    #[serde(rename = "Window_Ratio")]
    pub window_ratio: f64,
    /// Skylight-to-roof ratio as a fraction (zero for L and U shapes)
    #[serde(rename = "Skylight_Ratio")]
    pub skylight_ratio: f64,
    /// Orientation in degrees
    #[serde(rename = "Orientation")]
    pub orientation: f64,
    /// Volume-to-surface-area ratio
    #[serde(rename = "Form_Factor")]
    pub form_factor: f64,
    /// One-hot shape indicator
    #[serde(rename = "Shape_Box")]
    pub shape_box: u8,
    /// One-hot shape indicator
    #[serde(rename = "Shape_L")]
    pub shape_l: u8,
    /// One-hot shape indicator
    #[serde(rename = "Shape_O")]
    pub shape_o: u8,
    /// One-hot shape indicator
    #[serde(rename = "Shape_U")]
    pub shape_u: u8,
}

impl FeatureVector {
    /// Encode a house spec and its derived geometry as a feature vector.
    ///
    /// This is a total mapping: a validated spec always encodes successfully.
    ///
    /// # Arguments
    ///
    /// * `spec` - The house spec
    /// * `geometry` - Geometry derived from the spec with [`HouseGeometry::from_spec`]
    /// * `unit_system` - The unit system the model's predictors expect
    pub fn encode(spec: &HouseSpec, geometry: &HouseGeometry, unit_system: UnitSystem) -> Self {
        let scale = unit_system.linear_scale();

        FeatureVector {
            width: (spec.width * scale).value(),
            length: (spec.length * scale).value(),
            height: (spec.height * scale).value(),
            area: geometry.area.value(),
            window_ratio: spec.window_fraction().into(),
            skylight_ratio: spec.skylight_fraction().into(),
            orientation: spec.orientation.degrees(),
            form_factor: geometry.form_factor().into(),
            shape_box: (spec.shape == Shape::Box) as u8,
            shape_l: (spec.shape == Shape::L) as u8,
            shape_o: (spec.shape == Shape::O) as u8,
            shape_u: (spec.shape == Shape::U) as u8,
        }
    }

    /// The ordered (name, value) pairs making up the vector.
    ///
    /// Predictor coefficient files are keyed by these names.
    pub fn fields(&self) -> [(&'static str, f64); 12] {
        [
            ("Width", self.width),
            ("Length", self.length),
            ("Height", self.height),
            ("Area", self.area),
            ("Window_Ratio", self.window_ratio),
            ("Skylight_Ratio", self.skylight_ratio),
            ("Orientation", self.orientation),
            ("Form_Factor", self.form_factor),
            ("Shape_Box", self.shape_box as f64),
            ("Shape_L", self.shape_l as f64),
            ("Shape_O", self.shape_o as f64),
            ("Shape_U", self.shape_u as f64),
        ]
    }

    /// Recover the shape from the one-hot indicators.
    ///
    /// # Returns
    ///
    /// The shape, or an error if the indicators are not a valid one-hot encoding.
    pub fn shape(&self) -> Result<Shape> {
        let flags = [
            (Shape::Box, self.shape_box),
            (Shape::L, self.shape_l),
            (Shape::O, self.shape_o),
            (Shape::U, self.shape_u),
        ];
        match flags.iter().filter(|(_, flag)| *flag == 1).collect::<Vec<_>>()[..] {
            [(shape, _)] => Ok(*shape),
            _ => bail!("Shape indicators are not one-hot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::house_spec;
    use crate::house::ALL_SHAPES;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    fn encode_for_shape(house_spec: HouseSpec, shape: Shape) -> FeatureVector {
        let spec = HouseSpec {
            shape,
            skylight_ratio: shape.supports_skylights().then_some(20),
            ..house_spec
        };
        let geometry = HouseGeometry::from_spec(&spec, UnitSystem::Metres).unwrap();
        FeatureVector::encode(&spec, &geometry, UnitSystem::Metres)
    }

    #[rstest]
    fn test_encode(house_spec: HouseSpec) {
        let geometry = HouseGeometry::from_spec(&house_spec, UnitSystem::Metres).unwrap();
        let features = FeatureVector::encode(&house_spec, &geometry, UnitSystem::Metres);

        assert_approx_eq!(f64, features.area, 80.0);
        assert_approx_eq!(f64, features.window_ratio, 0.25);
        assert_approx_eq!(f64, features.skylight_ratio, 0.1);
        assert_approx_eq!(f64, features.orientation, 180.0);
        assert_approx_eq!(f64, features.form_factor, 0.8955, epsilon = 1e-4);
        assert_eq!(
            (features.shape_box, features.shape_l, features.shape_o, features.shape_u),
            (1, 0, 0, 0)
        );
    }

    /// Exactly one shape indicator is set and decoding recovers the original shape
    #[rstest]
    fn test_shape_round_trip(house_spec: HouseSpec) {
        for shape in ALL_SHAPES {
            let features = encode_for_shape(house_spec.clone(), shape);
            let flags = [
                features.shape_box,
                features.shape_l,
                features.shape_o,
                features.shape_u,
            ];
            assert_eq!(flags.iter().sum::<u8>(), 1);
            assert_eq!(features.shape().unwrap(), shape);
        }
    }

    #[rstest]
    fn test_skylight_ratio_zeroed_for_l_shape(house_spec: HouseSpec) {
        let features = encode_for_shape(house_spec, Shape::L);
        assert_approx_eq!(f64, features.skylight_ratio, 0.0);
    }

    #[rstest]
    fn test_fields_match_contract(house_spec: HouseSpec) {
        let features = encode_for_shape(house_spec, Shape::Box);
        let names: Vec<_> = features.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, FIELD_NAMES);
    }

    #[rstest]
    fn test_shape_decode_rejects_invalid(house_spec: HouseSpec) {
        let mut features = encode_for_shape(house_spec, Shape::Box);
        features.shape_u = 1;
        assert!(features.shape().is_err());
    }
}
