//! The module responsible for writing output data to disk.
use crate::estimate::{CostedMaterial, EstimateReport};
use crate::material::MaterialID;
use crate::units::{Dimensionless, KilowattHours, Money};
use anyhow::{Context, Result, ensure};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The root folder in which per-house output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "buildright_results";

/// The output file name for predicted loads and the loss score
const LOADS_FILE_NAME: &str = "loads.csv";

/// The output file name for recommended materials
const RECOMMENDATION_FILE_NAME: &str = "recommendation.csv";

/// The output file name for projected maintenance costs
const MAINTENANCE_FILE_NAME: &str = "maintenance_costs.csv";

/// The output file name for the feature vector (only written with debug output enabled)
const FEATURES_FILE_NAME: &str = "debug_features.csv";

/// Get the output directory for the specified house spec file
pub fn get_output_dir(house_path: &Path) -> Result<PathBuf> {
    let house_path = house_path
        .canonicalize()
        .context("Could not resolve path to house spec")?;

    let house_name = house_path
        .file_stem()
        .context("House spec cannot be a root folder")?
        .to_str()
        .context("Invalid chars in house spec file name")?;

    Ok([OUTPUT_DIRECTORY_ROOT, house_name].iter().collect())
}

/// Create a new output directory at the specified path.
///
/// # Returns
///
/// Whether an existing directory is being overwritten, or an error if one exists and `overwrite`
/// was not given.
pub fn create_output_directory(output_dir: &Path, overwrite: bool) -> Result<bool> {
    if output_dir.is_dir() {
        ensure!(
            overwrite,
            "Output directory {} already exists. Re-run with --overwrite to replace it.",
            output_dir.display()
        );

        return Ok(true);
    }

    fs::create_dir_all(output_dir)?;

    Ok(false)
}

/// Represents the single row of the loads CSV file
#[derive(Serialize, Debug, PartialEq)]
struct LoadsRow {
    cooling_load: KilowattHours,
    heating_load: KilowattHours,
    total_load: KilowattHours,
    loss_score: Dimensionless,
}

/// Represents a row in the recommendation CSV file
#[derive(Serialize, Debug, PartialEq)]
struct RecommendationRow<'a> {
    role: &'a str,
    material_id: &'a MaterialID,
    material: &'a str,
    effectiveness_per: Dimensionless,
    installation_cost: Money,
    applications: &'a str,
    additional_info: &'a str,
    installation_time: &'a str,
    lifespan_years: u32,
}

impl<'a> RecommendationRow<'a> {
    /// Create a new [`RecommendationRow`]
    fn new(role: &'a str, costed: &'a CostedMaterial) -> Self {
        let material = &costed.material;
        Self {
            role,
            material_id: &material.id,
            material: &material.material,
            effectiveness_per: material.effectiveness_per,
            installation_cost: costed.installation_cost,
            applications: &material.applications,
            additional_info: &material.additional_info,
            installation_time: &material.installation_time,
            lifespan_years: material.lifespan_years,
        }
    }
}

/// Represents a row in the maintenance costs CSV file
#[derive(Serialize, Debug, PartialEq)]
struct MaintenanceRow<'a> {
    material_id: &'a MaterialID,
    year: u32,
    cost: Money,
}

/// Write an estimate report as CSV files in the specified output directory.
///
/// # Arguments
///
/// * `output_dir` - The output directory (must already exist)
/// * `report` - The report to write
/// * `debug_features` - Whether to also write the feature vector
pub fn write_report(output_dir: &Path, report: &EstimateReport, debug_features: bool) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_dir.join(LOADS_FILE_NAME))?;
    writer.serialize(LoadsRow {
        cooling_load: report.cooling_load,
        heating_load: report.heating_load,
        total_load: report.total_load,
        loss_score: report.loss_score,
    })?;
    writer.flush()?;

    let recommended: Vec<(&str, &CostedMaterial)> = [
        ("best", report.best_material.as_ref()),
        ("best_cost", report.best_cost_material.as_ref()),
    ]
    .into_iter()
    .filter_map(|(role, costed)| Some((role, costed?)))
    .collect();

    if !recommended.is_empty() {
        let mut writer = csv::Writer::from_path(output_dir.join(RECOMMENDATION_FILE_NAME))?;
        for (role, costed) in &recommended {
            writer.serialize(RecommendationRow::new(role, costed))?;
        }
        writer.flush()?;

        let mut writer = csv::Writer::from_path(output_dir.join(MAINTENANCE_FILE_NAME))?;
        for (_, costed) in &recommended {
            for point in &costed.maintenance {
                writer.serialize(MaintenanceRow {
                    material_id: &costed.material.id,
                    year: point.year,
                    cost: point.cost,
                })?;
            }
        }
        writer.flush()?;
    }

    if debug_features {
        let mut writer = csv::Writer::from_path(output_dir.join(FEATURES_FILE_NAME))?;
        writer.serialize(&report.features)?;
        writer.flush()?;
    }

    Ok(())
}
