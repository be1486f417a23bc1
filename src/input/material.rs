//! Code for reading the insulation materials table from a CSV file.
use super::*;
use crate::material::{Material, MaterialMap};
use crate::units::{Dimensionless, MoneyPerArea};
use std::path::Path;
use std::rc::Rc;

const MATERIALS_FILE_NAME: &str = "materials.csv";

/// Read the materials reference table from the specified model directory.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
///
/// # Returns
///
/// A [`MaterialMap`] in table order, or an error if the file is missing or any row is invalid
pub fn read_materials(model_dir: &Path) -> Result<MaterialMap> {
    let file_path = model_dir.join(MATERIALS_FILE_NAME);
    let materials = read_csv_id_file::<Material, _>(&file_path)?;

    let materials: MaterialMap = materials
        .into_iter()
        .map(|(id, material)| (id, Rc::new(material)))
        .collect();
    validate_materials(materials.values().map(Rc::as_ref))
        .with_context(|| input_err_msg(&file_path))?;

    Ok(materials)
}

/// Check that every material has sane effectiveness, costs and lifespan
fn validate_materials<'a, I>(materials: I) -> Result<()>
where
    I: Iterator<Item = &'a Material>,
{
    for material in materials {
        let id = &material.id;
        ensure!(
            (Dimensionless(0.0)..=Dimensionless(100.0)).contains(&material.effectiveness_per),
            "Material '{id}': effectiveness must be between 0 and 100"
        );

        for (name, cost) in [
            ("installation", material.installation_cost_per_sqm),
            ("maintenance", material.maintenance_cost_per_sqm),
        ] {
            ensure!(
                cost.is_finite() && cost >= MoneyPerArea(0.0),
                "Material '{id}': {name} cost cannot be negative"
            );
        }

        ensure!(
            material.lifespan_years > 0,
            "Material '{id}': lifespan cannot be zero"
        );
    }

    Ok(())
}
