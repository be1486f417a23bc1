use buildright::model::EstimatorModel;
use std::path::{Path, PathBuf};

/// Get the path to the example model.
fn get_model_dir() -> PathBuf {
    Path::new(file!())
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
        .join("bungalow")
}

/// An integration test which attempts to load the example model
#[test]
fn test_model_from_path() {
    let model = EstimatorModel::from_path(get_model_dir()).unwrap();
    assert_eq!(model.materials.len(), 10);
    assert_eq!(model.houses.len(), 12);
}
