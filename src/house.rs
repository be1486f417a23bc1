//! The house specification supplied by the user.
//!
//! A house spec is a small TOML file giving the dimensions of the building along with the design
//! choices (shape, orientation, glazing ratios) that feed the load predictors.
use crate::input::read_toml;
use crate::units::{Dimensionless, Metres};
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};
use std::ops::RangeInclusive;
use std::path::Path;

/// The valid range for window and skylight ratios, as integer percentages
pub const GLAZING_RATIO_RANGE: RangeInclusive<u32> = 10..=40;

/// The footprint shape of a house
#[derive(PartialEq, Eq, Clone, Copy, Debug, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum Shape {
    /// A plain rectangular footprint
    #[string = "box"]
    Box,
    /// An L-shaped footprint
    #[string = "l"]
    L,
    /// A closed footprint around a courtyard
    #[string = "o"]
    O,
    /// A U-shaped footprint
    #[string = "u"]
    U,
}

/// All possible shapes, in the order the feature vector lists them
pub const ALL_SHAPES: [Shape; 4] = [Shape::Box, Shape::L, Shape::O, Shape::U];

impl Shape {
    /// Whether this shape has a roof that can accommodate skylights.
    ///
    /// L and U shapes cannot; their skylight ratio is always zero.
    pub fn supports_skylights(&self) -> bool {
        !matches!(self, Shape::L | Shape::U)
    }
}

/// The compass orientation of a house's main facade
#[allow(missing_docs)]
#[derive(PartialEq, Eq, Clone, Copy, Debug, SerializeLabeledStringEnum, DeserializeLabeledStringEnum)]
pub enum Orientation {
    #[string = "north"]
    North,
    #[string = "north_east"]
    NorthEast,
    #[string = "east"]
    East,
    #[string = "south_east"]
    SouthEast,
    #[string = "south"]
    South,
    #[string = "south_west"]
    SouthWest,
    #[string = "west"]
    West,
    #[string = "north_west"]
    NorthWest,
}

impl Orientation {
    /// The degree value the load predictors were trained on.
    ///
    /// NB: south west is 255, not 225. The predictors were trained with this encoding, so it must
    /// be preserved even though it is not a true compass bearing.
    pub fn degrees(&self) -> f64 {
        match self {
            Orientation::North => 0.0,
            Orientation::NorthEast => 45.0,
            Orientation::East => 90.0,
            Orientation::SouthEast => 135.0,
            Orientation::South => 180.0,
            Orientation::SouthWest => 255.0,
            Orientation::West => 270.0,
            Orientation::NorthWest => 315.0,
        }
    }
}

/// A house specification, as supplied by the user
#[derive(PartialEq, Clone, Debug, Deserialize)]
pub struct HouseSpec {
    /// Length of the house
    pub length: Metres,
    /// Width of the house
    pub width: Metres,
    /// Height of the house
    pub height: Metres,
    /// Footprint shape
    pub shape: Shape,
    /// Compass orientation of the main facade
    pub orientation: Orientation,
    /// Window-to-wall ratio as an integer percentage
    pub window_ratio: u32,
    /// Skylight-to-roof ratio as an integer percentage.
    ///
    /// Must be given for shapes which support skylights and omitted otherwise.
    pub skylight_ratio: Option<u32>,
}

impl HouseSpec {
    /// Read a house spec from the specified TOML file, validating it.
    pub fn from_path(file_path: &Path) -> Result<HouseSpec> {
        let spec: HouseSpec = read_toml(file_path)?;
        spec.validate()
            .with_context(|| format!("Invalid house spec in {}", file_path.display()))?;

        Ok(spec)
    }

    /// Check that dimensions and glazing ratios are valid
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            ensure!(
                value.is_finite() && value > Metres(0.0),
                "House {name} must be a positive number"
            );
        }

        ensure!(
            GLAZING_RATIO_RANGE.contains(&self.window_ratio),
            "Window ratio must be between {}% and {}%",
            GLAZING_RATIO_RANGE.start(),
            GLAZING_RATIO_RANGE.end()
        );

        if self.shape.supports_skylights() {
            let ratio = self
                .skylight_ratio
                .context("A skylight ratio must be given for this house shape")?;
            ensure!(
                GLAZING_RATIO_RANGE.contains(&ratio),
                "Skylight ratio must be between {}% and {}%",
                GLAZING_RATIO_RANGE.start(),
                GLAZING_RATIO_RANGE.end()
            );
        } else {
            ensure!(
                self.skylight_ratio.is_none(),
                "L and U shaped houses cannot have skylights"
            );
        }

        Ok(())
    }

    /// The window ratio as a fraction
    pub fn window_fraction(&self) -> Dimensionless {
        Dimensionless(self.window_ratio as f64 / 100.0)
    }

    /// The skylight ratio as a fraction.
    ///
    /// Zero for shapes which cannot have skylights.
    pub fn skylight_fraction(&self) -> Dimensionless {
        if !self.shape.supports_skylights() {
            return Dimensionless(0.0);
        }

        Dimensionless(self.skylight_ratio.unwrap_or(0) as f64 / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, house_spec};
    use rstest::rstest;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[rstest]
    fn test_house_spec_valid(house_spec: HouseSpec) {
        assert!(house_spec.validate().is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_house_spec_bad_dimension(house_spec: HouseSpec, #[case] length: f64) {
        let spec = HouseSpec {
            length: Metres(length),
            ..house_spec
        };
        assert_error!(spec.validate(), "House length must be a positive number");
    }

    #[rstest]
    #[case(9)]
    #[case(41)]
    fn test_house_spec_bad_window_ratio(house_spec: HouseSpec, #[case] ratio: u32) {
        let spec = HouseSpec {
            window_ratio: ratio,
            ..house_spec
        };
        assert_error!(spec.validate(), "Window ratio must be between 10% and 40%");
    }

    #[rstest]
    fn test_house_spec_skylights_required(house_spec: HouseSpec) {
        let spec = HouseSpec {
            skylight_ratio: None,
            ..house_spec
        };
        assert_error!(
            spec.validate(),
            "A skylight ratio must be given for this house shape"
        );
    }

    #[rstest]
    fn test_house_spec_no_skylights_for_l_shape(house_spec: HouseSpec) {
        let spec = HouseSpec {
            shape: Shape::L,
            ..house_spec
        };
        assert_error!(spec.validate(), "L and U shaped houses cannot have skylights");
    }

    #[rstest]
    fn test_skylight_fraction_zero_for_u_shape(house_spec: HouseSpec) {
        let spec = HouseSpec {
            shape: Shape::U,
            skylight_ratio: None,
            ..house_spec
        };
        assert_eq!(spec.skylight_fraction(), Dimensionless(0.0));
    }

    #[test]
    fn test_house_spec_from_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("house.toml");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(
                file,
                "length = 10.0
width = 8.0
height = 3.0
shape = \"box\"
orientation = \"south\"
window_ratio = 25
skylight_ratio = 10"
            )
            .unwrap();
        }

        let spec = HouseSpec::from_path(&file_path).unwrap();
        assert_eq!(spec.shape, Shape::Box);
        assert_eq!(spec.orientation, Orientation::South);
        assert_eq!(spec.window_fraction(), Dimensionless(0.25));
    }
}
