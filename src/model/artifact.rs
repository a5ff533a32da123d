use serde::{Deserialize, Serialize};

use crate::core::record::InputRecord;
use crate::model::classifier::{Classifier, PredictError};
use crate::model::naive_bayes::NaiveBayesModel;

/// On-disk classifier artifact. Tagged by model family so further fitted
/// models can be added without touching the loader or the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "kebab-case")]
pub enum ModelArtifact {
    NaiveBayes(NaiveBayesModel),
}

impl ModelArtifact {
    /// Feature names the model was fit on, in fit order.
    pub fn feature_names(&self) -> Vec<&str> {
        match self {
            ModelArtifact::NaiveBayes(m) => m.features.iter().map(|f| f.name.as_str()).collect(),
        }
    }
}

impl Classifier for ModelArtifact {
    fn classes(&self) -> &[String] {
        match self {
            ModelArtifact::NaiveBayes(m) => m.classes(),
        }
    }

    fn class_probabilities(&self, record: &InputRecord) -> Result<Vec<f64>, PredictError> {
        match self {
            ModelArtifact::NaiveBayes(m) => m.class_probabilities(record),
        }
    }

    fn classify(&self, record: &InputRecord) -> Result<String, PredictError> {
        match self {
            ModelArtifact::NaiveBayes(m) => m.classify(record),
        }
    }
}
