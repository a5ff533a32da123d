mod error;
mod loader;

pub use error::ArtifactError;
pub use loader::{SessionContext, load_dataset, load_model};
