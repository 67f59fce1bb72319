use crate::classifiers::Classifier;
use crate::core::{ClassDistribution, Label, Sample};
use crate::streams::generators::SnowRule;

const HEAVY_SNOW_TABLE: ClassDistribution = ClassDistribution::from_table([0.05, 0.20, 0.75]);
const LIGHT_SNOW_TABLE: ClassDistribution = ClassDistribution::from_table([0.10, 0.70, 0.20]);
const NO_SNOW_TABLE: ClassDistribution = ClassDistribution::from_table([0.80, 0.15, 0.05]);

/// Rule-based classifier with no training step.
///
/// Point predictions apply [`SnowRule::STANDARD`]. Probabilities are a fixed
/// table keyed by the branch that fired; they are not calibrated.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier {
    rule: SnowRule,
}

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(label: Label) -> ClassDistribution {
        match label {
            Label::HeavySnow => HEAVY_SNOW_TABLE,
            Label::LightSnow => LIGHT_SNOW_TABLE,
            Label::NoSnow => NO_SNOW_TABLE,
        }
    }
}

impl Classifier for HeuristicClassifier {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn predict_probabilities(&self, sample: &Sample) -> ClassDistribution {
        Self::table(self.rule.classify(sample))
    }

    fn predict(&self, sample: &Sample) -> Label {
        self.rule.classify(sample)
    }

    fn classify(&self, sample: &Sample) -> (Label, ClassDistribution) {
        let label = self.rule.classify(sample);
        (label, Self::table(label))
    }
}
