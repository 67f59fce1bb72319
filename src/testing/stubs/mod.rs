pub mod fixed_classifier;
pub mod scripted_driver;
pub mod vec_stream;

pub use fixed_classifier::FixedClassifier;
pub use scripted_driver::ScriptedDriver;
pub use vec_stream::VecStream;
