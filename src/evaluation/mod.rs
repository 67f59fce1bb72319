mod confusion_matrix;
mod holdout;

pub use confusion_matrix::ConfusionMatrix;
pub use holdout::HoldoutReport;
