use crate::classifiers::Classifier;
use crate::core::{CLASS_COUNT, ClassDistribution, Label, Sample};

/// Always predicts the same label with full confidence.
pub struct FixedClassifier {
    label: Label,
}

impl FixedClassifier {
    pub fn new(label: Label) -> Self {
        Self { label }
    }
}

impl Classifier for FixedClassifier {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn predict_probabilities(&self, _sample: &Sample) -> ClassDistribution {
        let mut table = [0.0; CLASS_COUNT];
        table[self.label.index()] = 1.0;
        ClassDistribution::from_table(table)
    }
}
