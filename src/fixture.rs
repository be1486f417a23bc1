//! Fixtures for tests
use crate::efficiency::CalibrationBounds;
use crate::features::{FIELD_NAMES, FeatureVector};
use crate::geometry::{HouseGeometry, UnitSystem};
use crate::house::{HouseSpec, Orientation, Shape};
use crate::input::house::HouseRecord;
use crate::material::{InsulationType, Material, MaterialMap};
use crate::model::parameters::EstimatorParameters;
use crate::model::EstimatorModel;
use crate::predictor::LinearModel;
use crate::units::{Dimensionless, KilowattHours, Metres, MoneyPerArea};
use rstest::fixture;
use std::rc::Rc;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

#[fixture]
pub fn house_spec() -> HouseSpec {
    HouseSpec {
        length: Metres(10.0),
        width: Metres(8.0),
        height: Metres(3.0),
        shape: Shape::Box,
        orientation: Orientation::South,
        window_ratio: 25,
        skylight_ratio: Some(10),
    }
}

#[fixture]
pub fn features(house_spec: HouseSpec) -> FeatureVector {
    let geometry = HouseGeometry::from_spec(&house_spec, UnitSystem::Metres).unwrap();
    FeatureVector::encode(&house_spec, &geometry, UnitSystem::Metres)
}

/// A linear model with the given intercept and coefficient on the floor area.
///
/// All other coefficients are zero, making predictions easy to work out by hand.
pub fn linear_model_with(intercept: f64, area_coefficient: f64) -> LinearModel {
    LinearModel {
        intercept,
        coefficients: FIELD_NAMES
            .iter()
            .map(|name| {
                let coefficient = if *name == "Area" { area_coefficient } else { 0.0 };
                (name.to_string(), coefficient)
            })
            .collect(),
    }
}

#[fixture]
pub fn linear_model() -> LinearModel {
    linear_model_with(1.0, 0.1)
}

/// A material with the given id, effectiveness, insulation type and installation cost
pub fn material(
    id: &str,
    effectiveness: f64,
    type_insulated: InsulationType,
    installation_cost: f64,
) -> Material {
    Material {
        id: id.into(),
        material: id.replace('_', " "),
        effectiveness_per: Dimensionless(effectiveness),
        type_insulated,
        installation_cost_per_sqm: MoneyPerArea(installation_cost),
        maintenance_cost_per_sqm: MoneyPerArea(installation_cost / 10.0),
        applications: "Walls".to_string(),
        additional_info: String::new(),
        installation_time: "1 day".to_string(),
        lifespan_years: 25,
    }
}

#[fixture]
pub fn material_map() -> MaterialMap {
    [
        material("foam_board", 96.0, InsulationType::Cooling, 40.0),
        material("radiant_barrier", 92.0, InsulationType::Cooling, 12.0),
        material("spray_foam", 97.0, InsulationType::Heating, 45.0),
        material("cellulose", 91.0, InsulationType::Heating, 14.0),
        material("reflective_paint", 75.0, InsulationType::Cooling, 8.0),
        material("mineral_wool", 85.0, InsulationType::Heating, 20.0),
    ]
    .into_iter()
    .map(|material| (material.id.clone(), Rc::new(material)))
    .collect()
}

#[fixture]
pub fn calibration_bounds() -> CalibrationBounds {
    CalibrationBounds {
        min_cooling_load: KilowattHours(42.31),
        max_cooling_load: KilowattHours(50.36),
        min_heating_load: KilowattHours(0.29),
        max_heating_load: KilowattHours(1.80),
    }
}

#[fixture]
pub fn house_record() -> HouseRecord {
    HouseRecord {
        width: 8.0,
        length: 10.0,
        height: 3.0,
        area: 80.0,
        window_ratio: 0.25,
        skylight_ratio: 0.1,
        orientation: 180.0,
        form_factor: 0.8955,
        cooling_load: KilowattHours(45.2),
        heating_load: KilowattHours(0.9),
    }
}

#[fixture]
pub fn estimator_model(
    calibration_bounds: CalibrationBounds,
    material_map: MaterialMap,
    house_record: HouseRecord,
) -> EstimatorModel {
    EstimatorModel {
        parameters: EstimatorParameters {
            calibration: calibration_bounds,
            cooling_weight: Dimensionless(0.9),
            unit_system: UnitSystem::Metres,
            maintenance_horizon_years: 10,
        },
        materials: material_map,
        houses: vec![house_record],
        cooling_predictor: linear_model_with(1.0, 0.1),
        heating_predictor: linear_model_with(0.5, 0.01),
    }
}
