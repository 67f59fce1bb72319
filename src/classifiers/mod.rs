mod classifier;
mod heuristic;
pub mod random_forest;

pub use classifier::Classifier;
pub use heuristic::HeuristicClassifier;
pub use random_forest::{ForestParams, RandomForest, TrainError};
