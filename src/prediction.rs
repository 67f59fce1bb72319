//! The single entry point every front-end predicts through.

use crate::classifiers::Classifier;
use crate::core::{ClassDistribution, Label, Sample};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_TEMPERATURE: f64 = 0.0;
pub const DEFAULT_HUMIDITY: f64 = 50.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got {raw}")]
    NotANumber { field: &'static str, raw: String },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

/// Parses a user-supplied reading. Surrounding whitespace is ignored.
pub fn parse_reading(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let value: f64 = raw.trim().parse().map_err(|_| InputError::NotANumber {
        field,
        raw: format!("{raw:?}"),
    })?;
    ensure_finite(field, value)
}

pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: Label,
    pub probabilities: ClassDistribution,
    pub input: Sample,
}

/// Wraps the classifier chosen at startup. Cheap to clone; the classifier
/// itself is shared read-only.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Any finite pair is accepted, including values outside the training
    /// range.
    pub fn predict(&self, temperature: f64, humidity: f64) -> Result<Prediction, InputError> {
        let sample = Sample::new(
            ensure_finite("temperature", temperature)?,
            ensure_finite("humidity", humidity)?,
        );
        let (label, probabilities) = self.classifier.classify(&sample);
        debug!(
            temperature,
            humidity,
            label = label.name(),
            classifier = self.classifier.name(),
            "prediction"
        );
        Ok(Prediction {
            label,
            probabilities,
            input: sample,
        })
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::HeuristicClassifier;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn heuristic() -> Predictor {
        Predictor::new(Arc::new(HeuristicClassifier::new()))
    }

    #[test]
    fn reference_scenarios_under_heuristic() {
        let p = heuristic();

        let heavy = p.predict(-5.0, 80.0).unwrap();
        assert_eq!(heavy.label, Label::HeavySnow);
        assert_eq!(heavy.probabilities.as_array(), [0.05, 0.20, 0.75]);
        assert_eq!(heavy.input, Sample::new(-5.0, 80.0));

        assert_eq!(p.predict(1.0, 60.0).unwrap().label, Label::LightSnow);
        assert_eq!(p.predict(5.0, 30.0).unwrap().label, Label::NoSnow);
    }

    #[derive(Default)]
    struct CountingClassifier {
        passes: AtomicUsize,
    }

    impl Classifier for CountingClassifier {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn predict_probabilities(&self, _sample: &Sample) -> ClassDistribution {
            self.passes.fetch_add(1, Ordering::SeqCst);
            ClassDistribution::from_table([0.2, 0.3, 0.5])
        }
    }

    #[test]
    fn each_prediction_runs_the_model_once() {
        let counting = Arc::new(CountingClassifier::default());
        let p = Predictor::new(counting.clone());

        let prediction = p.predict(-1.0, 75.0).unwrap();
        assert_eq!(prediction.label, Label::HeavySnow);
        assert_eq!(prediction.probabilities.as_array(), [0.2, 0.3, 0.5]);
        assert_eq!(counting.passes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        let p = heuristic();
        assert_eq!(p.predict(-100.0, 500.0).unwrap().label, Label::HeavySnow);
        assert_eq!(p.predict(40.0, -5.0).unwrap().label, Label::NoSnow);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let p = heuristic();
        assert!(matches!(
            p.predict(f64::NAN, 50.0),
            Err(InputError::NotFinite { field: "temperature", .. })
        ));
        assert!(matches!(
            p.predict(0.0, f64::INFINITY),
            Err(InputError::NotFinite { field: "humidity", .. })
        ));
    }

    #[test]
    fn parse_reading_handles_text() {
        assert_eq!(parse_reading("temperature", " -3.5 "), Ok(-3.5));
        assert_eq!(parse_reading("humidity", "80"), Ok(80.0));

        let err = parse_reading("temperature", "abc").unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: "temperature",
                raw: "\"abc\"".into()
            }
        );
        assert_eq!(err.to_string(), "temperature must be a number, got \"abc\"");

        assert!(parse_reading("humidity", "").is_err());
        assert!(matches!(
            parse_reading("humidity", "inf"),
            Err(InputError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_reading("humidity", "NaN"),
            Err(InputError::NotFinite { .. })
        ));
    }
}
