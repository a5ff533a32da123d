pub mod artifacts;
pub mod core;
pub mod model;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
