//! Code for reading load predictor models from TOML files.
use super::*;
use crate::predictor::{LinearModel, LoadType};
use std::path::Path;

const COOLING_MODEL_FILE_NAME: &str = "cooling_model.toml";
const HEATING_MODEL_FILE_NAME: &str = "heating_model.toml";

/// Read the predictor model for the given load type from the specified model directory.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
/// * `load_type` - Which load the predictor estimates
///
/// # Returns
///
/// The validated model, or an error if the file is missing or its coefficients do not match the
/// feature-vector contract
pub fn read_predictor(model_dir: &Path, load_type: LoadType) -> Result<LinearModel> {
    let file_name = match load_type {
        LoadType::Cooling => COOLING_MODEL_FILE_NAME,
        LoadType::Heating => HEATING_MODEL_FILE_NAME,
    };
    let file_path = model_dir.join(file_name);

    let model: LinearModel = read_toml(&file_path)
        .with_context(|| format!("Failed to load the {load_type} load predictor"))?;
    model.validate().with_context(|| input_err_msg(&file_path))?;

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FIELD_NAMES;
    use std::fmt::Write as _;
    use std::fs;
    use tempfile::tempdir;

    /// Create an example predictor file in dir_path
    fn create_predictor_file(dir_path: &Path, file_name: &str, field_names: &[&str]) {
        let mut contents = "intercept = 1.5\n\n[coefficients]\n".to_string();
        for name in field_names {
            writeln!(contents, "{name} = 0.1").unwrap();
        }
        fs::write(dir_path.join(file_name), contents).unwrap();
    }

    #[test]
    fn test_read_predictor() {
        let dir = tempdir().unwrap();
        create_predictor_file(dir.path(), COOLING_MODEL_FILE_NAME, &FIELD_NAMES);

        let model = read_predictor(dir.path(), LoadType::Cooling).unwrap();
        assert_eq!(model.intercept, 1.5);
        assert_eq!(model.coefficients.len(), FIELD_NAMES.len());
    }

    #[test]
    fn test_read_predictor_missing_file() {
        let dir = tempdir().unwrap();
        create_predictor_file(dir.path(), COOLING_MODEL_FILE_NAME, &FIELD_NAMES);

        assert!(read_predictor(dir.path(), LoadType::Heating).is_err());
    }

    #[test]
    fn test_read_predictor_incomplete_coefficients() {
        let dir = tempdir().unwrap();
        create_predictor_file(
            dir.path(),
            HEATING_MODEL_FILE_NAME,
            &FIELD_NAMES[..FIELD_NAMES.len() - 1],
        );

        assert!(read_predictor(dir.path(), LoadType::Heating).is_err());
    }
}
