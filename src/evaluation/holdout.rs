use crate::classifiers::Classifier;
use crate::core::{CLASS_COUNT, Label};
use crate::evaluation::ConfusionMatrix;
use crate::streams::Dataset;
use serde::Serialize;
use strum::IntoEnumIterator;

/// Scores of a classifier on a dataset it was not trained on.
#[derive(Debug, Clone, Serialize)]
pub struct HoldoutReport {
    pub samples: u64,
    pub accuracy: f64,
    pub kappa: f64,
    pub precision: [f64; CLASS_COUNT],
    pub recall: [f64; CLASS_COUNT],
    pub f1: [f64; CLASS_COUNT],
    pub confusion: ConfusionMatrix,
}

impl HoldoutReport {
    pub fn evaluate(classifier: &dyn Classifier, dataset: &Dataset) -> Self {
        let mut confusion = ConfusionMatrix::default();
        for s in dataset.iter() {
            confusion.add(s.label, classifier.predict(&s.sample));
        }

        let per_class = |metric: fn(&ConfusionMatrix, Label) -> f64| {
            let mut values = [f64::NAN; CLASS_COUNT];
            for label in Label::iter() {
                values[label.index()] = metric(&confusion, label);
            }
            values
        };
        let precision = per_class(ConfusionMatrix::precision);
        let recall = per_class(ConfusionMatrix::recall);
        let f1 = per_class(ConfusionMatrix::f1);

        Self {
            samples: confusion.total(),
            accuracy: confusion.accuracy(),
            kappa: confusion.kappa(),
            precision,
            recall,
            f1,
            confusion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::HeuristicClassifier;
    use crate::testing::FixedClassifier;

    #[test]
    fn heuristic_accuracy_is_bounded_by_label_noise() {
        let report = HoldoutReport::evaluate(&HeuristicClassifier::new(), &Dataset::generate(20_000, 7));
        assert_eq!(report.samples, 20_000);
        // 5% redraws, two thirds of which change the label.
        assert!((report.accuracy - (1.0 - 0.05 * 2.0 / 3.0)).abs() < 0.01, "{}", report.accuracy);
        assert!(report.recall.iter().all(|r| *r > 0.9));
        assert!(report.precision.iter().all(|p| *p > 0.9));
        assert!(report.f1.iter().all(|f| *f > 0.9));
    }

    #[test]
    fn constant_classifier_scores_zero_kappa() {
        let report = HoldoutReport::evaluate(
            &FixedClassifier::new(Label::NoSnow),
            &Dataset::generate(1_000, 7),
        );
        assert!(report.kappa.abs() < 1e-12);
        assert!((report.recall[Label::NoSnow.index()] - 1.0).abs() < 1e-12);
        assert_eq!(report.recall[Label::HeavySnow.index()], 0.0);
    }

    #[test]
    fn per_class_scores_match_the_confusion_matrix() {
        let report = HoldoutReport::evaluate(&HeuristicClassifier::new(), &Dataset::generate(500, 3));
        for label in Label::iter() {
            let i = label.index();
            assert_eq!(report.precision[i], report.confusion.precision(label));
            assert_eq!(report.recall[i], report.confusion.recall(label));
            assert_eq!(report.f1[i], report.confusion.f1(label));
        }

        let json = serde_json::to_value(&report).unwrap();
        for key in ["precision", "recall", "f1"] {
            assert_eq!(json[key].as_array().map(Vec::len), Some(CLASS_COUNT), "{key}");
        }
    }

    #[test]
    fn empty_dataset_reports_nan_accuracy() {
        let report = HoldoutReport::evaluate(&HeuristicClassifier::new(), &Dataset::generate(0, 7));
        assert_eq!(report.samples, 0);
        assert!(report.accuracy.is_nan());
    }
}
