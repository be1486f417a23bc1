//! The estimation pipeline: geometry to features to loads to score to materials to costs.
use crate::cost::{MaintenancePoint, installation_cost, maintenance_schedule, wall_area_for_spec};
use crate::efficiency::loss_score;
use crate::features::FeatureVector;
use crate::geometry::HouseGeometry;
use crate::house::HouseSpec;
use crate::material::Material;
use crate::model::EstimatorModel;
use crate::predictor::{LoadPredictor, LoadType};
use crate::recommend::{Recommendation, recommend_materials};
use crate::units::{Dimensionless, KilowattHours, Money};
use anyhow::{Context, Result};
use log::info;
use std::rc::Rc;

/// A recommended material with its projected costs for the house
#[derive(PartialEq, Clone, Debug)]
pub struct CostedMaterial {
    /// The material
    pub material: Rc<Material>,
    /// One-time installation cost over the house's wall area
    pub installation_cost: Money,
    /// Cumulative maintenance cost per year, out to the model's horizon
    pub maintenance: Vec<MaintenancePoint>,
}

/// The full result of one pipeline pass
#[derive(PartialEq, Clone, Debug)]
pub struct EstimateReport {
    /// The feature vector the loads were predicted from
    pub features: FeatureVector,
    /// Predicted cooling load
    pub cooling_load: KilowattHours,
    /// Predicted heating load
    pub heating_load: KilowattHours,
    /// Sum of both loads
    pub total_load: KilowattHours,
    /// Loss score (0 = perfectly efficient, 100 = least efficient)
    pub loss_score: Dimensionless,
    /// Recommended materials with costs, if at least two suitable ones were found
    pub best_material: Option<CostedMaterial>,
    /// The cheapest suitable material with costs
    pub best_cost_material: Option<CostedMaterial>,
}

/// Run the estimation pipeline for one house spec.
///
/// One full pass, synchronous and stateless: nothing in the model is mutated, so independent
/// requests can run against the same model. Any failure is terminal for this request.
///
/// # Arguments
///
/// * `model` - The loaded estimator model
/// * `spec` - The house spec, already validated
///
/// # Returns
///
/// An [`EstimateReport`], or an error if the geometry is invalid or a predictor fails.
pub fn run(model: &EstimatorModel, spec: &HouseSpec) -> Result<EstimateReport> {
    let unit_system = model.parameters.unit_system;
    let geometry = HouseGeometry::from_spec(spec, unit_system)?;
    let features = FeatureVector::encode(spec, &geometry, unit_system);

    let cooling_load = predict_load(&model.cooling_predictor, LoadType::Cooling, &features)?;
    let heating_load = predict_load(&model.heating_predictor, LoadType::Heating, &features)?;
    let total_load = cooling_load + heating_load;
    info!(
        "Predicted loads: cooling {:.2} kWh, heating {:.2} kWh, total {:.2} kWh",
        cooling_load.value(),
        heating_load.value(),
        total_load.value()
    );

    let loss = loss_score(
        &model.parameters.calibration,
        model.parameters.cooling_weight,
        cooling_load,
        heating_load,
    );
    info!("Loss score: {:.2}%", loss.0);

    let recommendation = recommend_materials(&model.materials, loss, cooling_load, heating_load);
    let (best_material, best_cost_material) = match recommendation {
        Some(Recommendation { best, best_cost }) => {
            info!(
                "Recommended materials: {} (best), {} (best cost)",
                best.material, best_cost.material
            );
            (
                Some(cost_material(model, spec, best)),
                Some(cost_material(model, spec, best_cost)),
            )
        }
        None => {
            info!("No suitable materials found for this efficiency range");
            (None, None)
        }
    };

    Ok(EstimateReport {
        features,
        cooling_load,
        heating_load,
        total_load,
        loss_score: loss,
        best_material,
        best_cost_material,
    })
}

/// Predict one load, attaching the load type to any failure
fn predict_load(
    predictor: &dyn LoadPredictor,
    load_type: LoadType,
    features: &FeatureVector,
) -> Result<KilowattHours> {
    predictor
        .predict(features)
        .with_context(|| format!("Prediction unavailable for the {load_type} load"))
}

/// Project installation and maintenance costs for one recommended material
fn cost_material(
    model: &EstimatorModel,
    spec: &HouseSpec,
    material: Rc<Material>,
) -> CostedMaterial {
    let area = wall_area_for_spec(spec);
    let installation_cost = installation_cost(area, material.installation_cost_per_sqm);
    let maintenance = maintenance_schedule(
        area,
        material.maintenance_cost_per_sqm,
        model.parameters.maintenance_horizon_years,
    );

    CostedMaterial {
        material,
        installation_cost,
        maintenance,
    }
}
