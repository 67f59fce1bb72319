pub mod classifiers;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod logging;
pub mod model;
pub mod prediction;
pub mod streams;
pub mod ui;
pub mod web;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
