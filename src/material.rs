//! Insulation materials: the reference table recommendations are drawn from.
use crate::id::define_id_getter;
use crate::units::{Dimensionless, MoneyPerArea};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_string_enum::DeserializeLabeledStringEnum;
use std::rc::Rc;

crate::id::define_id_type!(MaterialID);

/// Which load a material insulates against
#[derive(PartialEq, Eq, Clone, Copy, Debug, DeserializeLabeledStringEnum)]
pub enum InsulationType {
    /// Keeps heat out
    #[string = "cooling"]
    Cooling,
    /// Keeps heat in
    #[string = "heating"]
    Heating,
}

impl std::fmt::Display for InsulationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsulationType::Cooling => write!(f, "cooling"),
            InsulationType::Heating => write!(f, "heating"),
        }
    }
}

/// An insulation material from the reference table.
///
/// Reference data: loaded once at startup and never mutated.
#[derive(PartialEq, Clone, Debug, Deserialize)]
pub struct Material {
    /// Unique identifier for the material (e.g. "spray_foam")
    pub id: MaterialID,
    /// Display name of the material
    pub material: String,
    /// Effectiveness percentage (0-100)
    pub effectiveness_per: Dimensionless,
    /// Which load the material insulates against
    pub type_insulated: InsulationType,
    /// One-time installation cost per square metre of wall
    pub installation_cost_per_sqm: MoneyPerArea,
    /// Recurring annual maintenance cost per square metre of wall
    pub maintenance_cost_per_sqm: MoneyPerArea,
    /// Typical applications of the material
    pub applications: String,
    /// Free-text notes
    pub additional_info: String,
    /// How long installation typically takes
    pub installation_time: String,
    /// Expected lifespan in years
    pub lifespan_years: u32,
}
define_id_getter! {Material, MaterialID}

/// A map of materials, keyed and ordered as in the reference table.
///
/// Table order matters: selection ties are broken by the first entry encountered.
pub type MaterialMap = IndexMap<MaterialID, Rc<Material>>;
