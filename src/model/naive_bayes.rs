use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::record::{FeatureValue, InputRecord};
use crate::model::classifier::{Classifier, PredictError};
use crate::utils::math::normal_probability;

/// Floor applied to every likelihood so a single unseen value cannot zero out
/// an entire class in log space.
const MIN_LIKELIHOOD: f64 = 1e-12;

const MIN_VARIANCE: f64 = 1e-9;

/// Fitted normal for one numeric feature under one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianStats {
    pub mean: f64,
    pub variance: f64,
}

/// Observed value counts for one categorical feature under one class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub counts: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FeatureLikelihood {
    /// Numeric feature: one fitted normal per class, indexed like `classes`.
    Gaussian { per_class: Vec<GaussianStats> },
    /// Categorical feature: per-class value counts, Laplace-smoothed when
    /// scored so unseen values stay possible.
    Frequency { per_class: Vec<CategoryCounts> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureModel {
    pub name: String,
    #[serde(flatten)]
    pub likelihood: FeatureLikelihood,
}

/// Naive Bayes over mixed categorical and integer-valued numeric features,
/// deserialized from a fitted artifact. Inference only; fitting happened
/// elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    /// Class labels in ascending order.
    pub classes: Vec<String>,
    /// Training instances seen per class, for the prior.
    pub class_counts: Vec<f64>,
    /// Per-feature likelihoods, in the schema order the model was fit on.
    pub features: Vec<FeatureModel>,
}

impl NaiveBayesModel {
    fn log_prior(&self, class_idx: usize) -> f64 {
        let total: f64 = self.class_counts.iter().sum();
        let count = self.class_counts.get(class_idx).copied().unwrap_or(0.0);
        ((count + 1.0) / (total + self.classes.len() as f64)).ln()
    }

    fn log_likelihood(
        &self,
        feature: &FeatureModel,
        value: &FeatureValue,
        class_idx: usize,
    ) -> Result<f64, PredictError> {
        let likelihood = match (&feature.likelihood, value) {
            (FeatureLikelihood::Gaussian { per_class }, FeatureValue::Number(n)) => {
                match per_class.get(class_idx) {
                    Some(stats) => {
                        let x = *n as f64;
                        let sd = stats.variance.max(MIN_VARIANCE).sqrt();
                        // Inputs are integers, so score the unit interval
                        // centred on the value instead of a point density.
                        let hi = normal_probability((x + 0.5 - stats.mean) / sd);
                        let lo = normal_probability((x - 0.5 - stats.mean) / sd);
                        hi - lo
                    }
                    None => 0.0,
                }
            }
            (FeatureLikelihood::Frequency { per_class }, FeatureValue::Category(v)) => {
                match per_class.get(class_idx) {
                    Some(class_counts) => {
                        let total: f64 = class_counts.counts.values().sum();
                        let observed = class_counts.counts.get(v).copied().unwrap_or(0.0);
                        // +1 on the bucket count leaves room for one unseen value.
                        let buckets = class_counts.counts.len() as f64 + 1.0;
                        (observed + 1.0) / (total + buckets)
                    }
                    None => 0.0,
                }
            }
            (FeatureLikelihood::Gaussian { .. }, FeatureValue::Category(_)) => {
                return Err(PredictError::WrongValueKind {
                    feature: feature.name.clone(),
                    expected: "numeric",
                });
            }
            (FeatureLikelihood::Frequency { .. }, FeatureValue::Number(_)) => {
                return Err(PredictError::WrongValueKind {
                    feature: feature.name.clone(),
                    expected: "categorical",
                });
            }
        };
        Ok(likelihood.max(MIN_LIKELIHOOD).ln())
    }
}

impl Classifier for NaiveBayesModel {
    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn class_probabilities(&self, record: &InputRecord) -> Result<Vec<f64>, PredictError> {
        if self.classes.is_empty() {
            return Err(PredictError::NoClasses);
        }

        let mut log_posteriors = Vec::with_capacity(self.classes.len());
        for class_idx in 0..self.classes.len() {
            let mut logp = self.log_prior(class_idx);
            for feature in &self.features {
                let value = record
                    .get(&feature.name)
                    .ok_or_else(|| PredictError::MissingFeature(feature.name.clone()))?;
                logp += self.log_likelihood(feature, value, class_idx)?;
            }
            log_posteriors.push(logp);
        }

        // Normalize in log space so tiny joint likelihoods do not underflow.
        let max = log_posteriors
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let mut probabilities: Vec<f64> = log_posteriors.iter().map(|lp| (lp - max).exp()).collect();
        let total: f64 = probabilities.iter().sum();
        for p in &mut probabilities {
            *p /= total;
        }
        Ok(probabilities)
    }
}
