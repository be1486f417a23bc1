//! Code for reading the historical houses dataset from a CSV file.
//!
//! The dataset is the one the load predictors were trained on. The pipeline itself never reads
//! it; it is loaded for context, summarised in the log and available to the `validate` command.
use super::*;
use crate::units::KilowattHours;
use log::info;
use serde::Deserialize;
use std::path::Path;

const HOUSES_FILE_NAME: &str = "houses.csv";

/// A historical house: the features the predictors were trained on, plus its measured loads
#[derive(PartialEq, Clone, Debug, Deserialize)]
pub struct HouseRecord {
    /// Width of the house
    #[serde(rename = "Width")]
    pub width: f64,
    /// Length of the house
    #[serde(rename = "Length")]
    pub length: f64,
    /// Height of the house
    #[serde(rename = "Height")]
    pub height: f64,
    /// Floor area
    #[serde(rename = "Area")]
    pub area: f64,
    /// Window-to-wall ratio as a fraction
    #[serde(rename = "Window_Ratio")]
    pub window_ratio: f64,
    /// Skylight-to-roof ratio as a fraction
    #[serde(rename = "Skylight_Ratio")]
    pub skylight_ratio: f64,
    /// Orientation in degrees
    #[serde(rename = "Orientation")]
    pub orientation: f64,
    /// Volume-to-surface-area ratio
    #[serde(rename = "Form_Factor")]
    pub form_factor: f64,
    /// Measured cooling load
    #[serde(rename = "Cooling_Load")]
    pub cooling_load: KilowattHours,
    /// Measured heating load
    #[serde(rename = "Heating_Load")]
    pub heating_load: KilowattHours,
}

/// Read the historical houses dataset from the specified model directory.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
///
/// # Returns
///
/// The house records, or an error if the file is missing or invalid
pub fn read_houses(model_dir: &Path) -> Result<Vec<HouseRecord>> {
    let file_path = model_dir.join(HOUSES_FILE_NAME);
    let houses: Vec<HouseRecord> = read_csv(&file_path)?.collect();

    let (min_cooling, max_cooling) = load_range(houses.iter().map(|house| house.cooling_load));
    let (min_heating, max_heating) = load_range(houses.iter().map(|house| house.heating_load));
    info!(
        "Loaded {} historical houses (cooling loads {:.2}-{:.2} kWh, heating loads {:.2}-{:.2} kWh)",
        houses.len(),
        min_cooling.value(),
        max_cooling.value(),
        min_heating.value(),
        max_heating.value()
    );

    Ok(houses)
}

/// The smallest and largest of a non-empty series of loads
fn load_range<I>(loads: I) -> (KilowattHours, KilowattHours)
where
    I: Iterator<Item = KilowattHours>,
{
    loads
        .map(|load| (load, load))
        .reduce(|(min, max), (load, _)| (if load < min { load } else { min }, if load > max { load } else { max }))
        .expect("Empty houses dataset")
}
