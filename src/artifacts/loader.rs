use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::artifacts::error::ArtifactError;
use crate::core::dataset::Dataset;
use crate::model::{Classifier, ModelArtifact};

/// Immutable per-session context: both artifacts are read from disk exactly
/// once, here, and shared read-only for the rest of the process. Nothing
/// mutates it after construction, so it is safe to hand out by reference.
#[derive(Debug)]
pub struct SessionContext {
    pub model: ModelArtifact,
    pub dataset: Dataset,
}

impl SessionContext {
    pub fn load(
        model_path: &Path,
        dataset_path: &Path,
        target: &str,
        id: &str,
    ) -> Result<Self, ArtifactError> {
        let model = load_model(model_path)?;
        let dataset = load_dataset(dataset_path, target, id)?;
        check_schema(&model, &dataset)?;
        Ok(Self { model, dataset })
    }
}

pub fn load_model(path: &Path) -> Result<ModelArtifact, ArtifactError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ArtifactError::MissingArtifact(path.to_path_buf())
        } else {
            ArtifactError::LoadFailure(format!("cannot open model file '{}': {e}", path.display()))
        }
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        ArtifactError::LoadFailure(format!("cannot parse model file '{}': {e}", path.display()))
    })
}

pub fn load_dataset(path: &Path, target: &str, id: &str) -> Result<Dataset, ArtifactError> {
    Dataset::from_path(path, target, id).map_err(|e| {
        ArtifactError::LoadFailure(format!("cannot load dataset '{}': {e}", path.display()))
    })
}

/// The model was fit on the dataset's exact feature schema and class set;
/// anything else would silently misalign the probability vector.
fn check_schema(model: &ModelArtifact, dataset: &Dataset) -> Result<(), ArtifactError> {
    let model_features = model.feature_names();
    let dataset_features: Vec<&str> = dataset.feature_names().collect();
    if model_features != dataset_features {
        return Err(ArtifactError::LoadFailure(format!(
            "model was fit on features [{}] but the dataset provides [{}]",
            model_features.join(", "),
            dataset_features.join(", ")
        )));
    }
    if model.classes() != dataset.class_labels() {
        return Err(ArtifactError::LoadFailure(format!(
            "model classes [{}] do not match the dataset's target labels [{}]",
            model.classes().join(", "),
            dataset.class_labels().join(", ")
        )));
    }
    Ok(())
}
