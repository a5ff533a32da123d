pub mod artifact;
pub mod classifier;
pub mod naive_bayes;

pub use artifact::ModelArtifact;
pub use classifier::{Classifier, PredictError};
pub use naive_bayes::NaiveBayesModel;
