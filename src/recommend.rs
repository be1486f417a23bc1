//! Selecting insulation materials for a scored house.
use crate::material::{InsulationType, Material, MaterialMap};
use crate::units::{Dimensionless, KilowattHours};
use std::rc::Rc;

/// The effectiveness range (lower inclusive, upper exclusive) eligible at a given loss score
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct EffectivenessBand {
    lower: Dimensionless,
    upper: Dimensionless,
}

impl EffectivenessBand {
    /// The band eligible for the given loss score.
    ///
    /// Houses losing little energy get the most effective materials; as the loss grows the band
    /// steps down. Boundaries are `loss <= 30` and `loss <= 65`.
    pub fn for_loss_score(loss: Dimensionless) -> Self {
        let (lower, upper) = if loss <= Dimensionless(30.0) {
            (90.0, 100.0)
        } else if loss <= Dimensionless(65.0) {
            (80.0, 90.0)
        } else {
            (70.0, 80.0)
        };

        EffectivenessBand {
            lower: Dimensionless(lower),
            upper: Dimensionless(upper),
        }
    }

    /// Whether the given effectiveness percentage falls in this band
    pub fn contains(&self, effectiveness: Dimensionless) -> bool {
        self.lower <= effectiveness && effectiveness < self.upper
    }
}

/// A pair of recommended materials
#[derive(PartialEq, Clone, Debug)]
pub struct Recommendation {
    /// The most effective eligible material
    pub best: Rc<Material>,
    /// The cheapest eligible material to install
    pub best_cost: Rc<Material>,
}

/// The insulation type to recommend for the given loads.
///
/// Materials target whichever load is smaller; the dominant load is assumed to be handled by the
/// primary system sizing.
pub fn insulation_type_for_loads(
    cooling_load: KilowattHours,
    heating_load: KilowattHours,
) -> InsulationType {
    if heating_load > cooling_load {
        InsulationType::Cooling
    } else {
        InsulationType::Heating
    }
}

/// Recommend materials for a house with the given loss score and loads.
///
/// The reference table is filtered to the effectiveness band for the loss score and the
/// insulation type for the loads. At least two matches are required; with fewer, there is no
/// recommendation (a degraded, non-error state for the caller to render). Ties on effectiveness
/// or cost are broken by table order, first entry winning.
///
/// # Arguments
///
/// * `materials` - The reference table of materials
/// * `loss` - The house loss score (0-100)
/// * `cooling_load`, `heating_load` - The predicted loads
pub fn recommend_materials(
    materials: &MaterialMap,
    loss: Dimensionless,
    cooling_load: KilowattHours,
    heating_load: KilowattHours,
) -> Option<Recommendation> {
    let band = EffectivenessBand::for_loss_score(loss);
    let type_insulated = insulation_type_for_loads(cooling_load, heating_load);

    let suitable: Vec<&Rc<Material>> = materials
        .values()
        .filter(|material| {
            material.type_insulated == type_insulated && band.contains(material.effectiveness_per)
        })
        .collect();
    if suitable.len() < 2 {
        return None;
    }

    // Strict comparisons so the first of equals is kept
    let mut best = suitable[0];
    let mut best_cost = suitable[0];
    for &material in &suitable[1..] {
        if material.effectiveness_per > best.effectiveness_per {
            best = material;
        }
        if material.installation_cost_per_sqm < best_cost.installation_cost_per_sqm {
            best_cost = material;
        }
    }

    Some(Recommendation {
        best: Rc::clone(best),
        best_cost: Rc::clone(best_cost),
    })
}
