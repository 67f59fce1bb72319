mod decision_tree;
mod error;
mod random_forest;
pub mod split_criteria;

pub use decision_tree::{DecisionTree, TreeNode, TreeParams};
pub use error::TrainError;
pub use random_forest::{ForestParams, RandomForest};
