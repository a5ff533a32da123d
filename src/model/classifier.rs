use thiserror::Error;

use crate::core::record::InputRecord;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("input record is missing feature '{0}'")]
    MissingFeature(String),

    #[error("feature '{feature}' expected a {expected} value")]
    WrongValueKind {
        feature: String,
        expected: &'static str,
    },

    #[error("model has no classes")]
    NoClasses,
}

/// Capability set the presenter consumes: a fitted, immutable classifier.
pub trait Classifier {
    /// Class labels in ascending order; probability vectors align with this.
    fn classes(&self) -> &[String];

    /// Per-class probabilities for one record, summing to 1 within
    /// floating-point tolerance.
    fn class_probabilities(&self, record: &InputRecord) -> Result<Vec<f64>, PredictError>;

    /// Predicted label: the class with the highest probability. Ties resolve
    /// to the lowest label so repeated calls stay deterministic.
    fn classify(&self, record: &InputRecord) -> Result<String, PredictError> {
        let probabilities = self.class_probabilities(record)?;
        let mut best: Option<usize> = None;
        let mut best_p = f64::NEG_INFINITY;
        for (idx, &p) in probabilities.iter().enumerate() {
            if best.is_none() || p > best_p {
                best = Some(idx);
                best_p = p;
            }
        }
        let idx = best.ok_or(PredictError::NoClasses)?;
        Ok(self.classes()[idx].clone())
    }
}
