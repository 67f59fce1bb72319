use crate::core::{ClassDistribution, Label, Sample};

/// A fitted snowiness classifier.
///
/// Implementations are read-only after construction and shared across
/// request handlers, hence `Send + Sync`.
pub trait Classifier: Send + Sync {
    /// Short identifier used in logs and the model description.
    fn name(&self) -> &'static str;

    fn predict_probabilities(&self, sample: &Sample) -> ClassDistribution;

    fn predict(&self, sample: &Sample) -> Label {
        self.predict_probabilities(sample).most_likely()
    }

    /// Label and probabilities from a single pass over the model.
    fn classify(&self, sample: &Sample) -> (Label, ClassDistribution) {
        let probabilities = self.predict_probabilities(sample);
        (probabilities.most_likely(), probabilities)
    }
}
