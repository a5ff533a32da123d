pub mod dataset;
pub mod feature;
pub mod record;

pub use dataset::{Dataset, DatasetError};
pub use feature::{FeatureColumn, FeatureDomain};
pub use record::{FeatureValue, InputRecord};
