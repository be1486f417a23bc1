//! Common routines for handling input data.
use crate::id::{HasID, IDLike};
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub mod house;
pub mod material;
pub mod predictor;

/// An error message for a problem in the given input file
pub fn input_err_msg<P: AsRef<Path>>(file_path: P) -> String {
    format!("Error reading {}", file_path.as_ref().display())
}

/// Parse a TOML file at the specified path.
///
/// # Arguments
///
/// * `file_path` - Path to the TOML file
///
/// # Returns
///
/// The parsed TOML data or an error if the file is invalid
pub fn read_toml<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let toml_str = fs::read_to_string(file_path).with_context(|| input_err_msg(file_path))?;
    toml::from_str(&toml_str).with_context(|| input_err_msg(file_path))
}

/// Read a series of type `T`s from the specified CSV file.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
///
/// # Returns
///
/// An iterator over the deserialised records or an error if the file is invalid or empty
pub fn read_csv<T: DeserializeOwned>(file_path: &Path) -> Result<impl Iterator<Item = T>> {
    let records = read_csv_internal(file_path).with_context(|| input_err_msg(file_path))?;

    Ok(records.into_iter())
}

fn read_csv_internal<T: DeserializeOwned>(file_path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(file_path)?;
    let records = reader.deserialize().process_results(|iter| iter.collect_vec())?;
    ensure!(!records.is_empty(), "CSV file cannot be empty");

    Ok(records)
}

/// Read a CSV file of records with IDs into a map keyed and ordered by ID.
///
/// # Arguments
///
/// * `file_path` - Path to the CSV file
///
/// # Returns
///
/// A map of the records keyed by ID, in file order, or an error if any ID is duplicated
pub fn read_csv_id_file<T, ID>(file_path: &Path) -> Result<IndexMap<ID, T>>
where
    T: HasID<ID> + DeserializeOwned,
    ID: IDLike,
{
    let mut map = IndexMap::new();
    for record in read_csv::<T>(file_path)? {
        let id = record.get_id().clone();
        let existing = map.insert(id.clone(), record);
        ensure!(
            existing.is_none(),
            "{}: Duplicate ID '{id}'",
            input_err_msg(file_path)
        );
    }

    Ok(map)
}
