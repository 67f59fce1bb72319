mod distribution;
mod label;
mod sample;

pub use distribution::ClassDistribution;
pub use label::{CLASS_COUNT, Label};
pub use sample::{FEATURE_COUNT, LabeledSample, Sample};
