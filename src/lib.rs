//! Common functionality for buildright.
#![warn(missing_docs)]
pub mod cli;
pub mod cost;
pub mod efficiency;
pub mod estimate;
pub mod features;
pub mod geometry;
pub mod house;
pub mod id;
pub mod input;
pub mod log;
pub mod material;
pub mod model;
pub mod output;
pub mod predictor;
pub mod recommend;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;

use std::path::PathBuf;

/// Get the path to the buildright configuration directory for the current user
pub fn get_buildright_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_default();
    path.push("buildright");

    path
}
