use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrainError {
    #[error("cannot fit a forest on an empty dataset")]
    EmptyDataset,

    #[error("a forest needs at least one estimator")]
    NoEstimators,

    #[error("max_features must be in 1..={limit}, got {got}")]
    InvalidMaxFeatures { got: usize, limit: usize },

    #[error("sample {index} has a non-finite feature value")]
    NonFiniteSample { index: usize },
}
