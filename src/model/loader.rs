use crate::classifiers::{Classifier, HeuristicClassifier, RandomForest, TrainError};
use crate::config::{Backend, ModelConfig};
use crate::evaluation::HoldoutReport;
use crate::model::{CacheOutcome, ModelCache};
use crate::streams::Dataset;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub path: String,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CacheStatus {
    fn new(cache: &ModelCache, outcome: &CacheOutcome) -> Self {
        Self {
            path: cache.path().display().to_string(),
            outcome: outcome.status(),
            detail: outcome.error().map(ToString::to_string),
        }
    }
}

/// What is serving predictions, reported by `GET /api/model`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelDescription {
    pub backend: Backend,
    pub classifier: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimators: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_samples: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<CacheStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holdout: Option<HoldoutReport>,
}

pub struct LoadedModel {
    pub classifier: Arc<dyn Classifier>,
    pub description: ModelDescription,
}

/// Builds the classifier selected by `config`.
///
/// Only training failures are errors. Cache problems are logged and
/// recorded in the description.
pub fn load_model(config: &ModelConfig) -> Result<LoadedModel, TrainError> {
    let (classifier, mut description): (Arc<dyn Classifier>, ModelDescription) =
        match config.backend {
            Backend::Heuristic => {
                info!("using heuristic classifier");
                let classifier = HeuristicClassifier::new();
                let description = ModelDescription {
                    backend: Backend::Heuristic,
                    classifier: classifier.name(),
                    estimators: None,
                    training_samples: None,
                    cache: None,
                    holdout: None,
                };
                (Arc::new(classifier), description)
            }
            Backend::Forest => {
                let (forest, cache) = load_forest(config)?;
                let description = ModelDescription {
                    backend: Backend::Forest,
                    classifier: forest.name(),
                    estimators: Some(forest.n_estimators()),
                    training_samples: Some(forest.training_samples()),
                    cache,
                    holdout: None,
                };
                (Arc::new(forest), description)
            }
        };

    if config.holdout_size > 0 {
        let holdout = Dataset::generate(config.holdout_size, config.holdout_seed);
        let report = HoldoutReport::evaluate(classifier.as_ref(), &holdout);
        info!(
            samples = report.samples,
            accuracy = report.accuracy,
            kappa = report.kappa,
            "holdout evaluation"
        );
        description.holdout = Some(report);
    }

    Ok(LoadedModel {
        classifier,
        description,
    })
}

fn load_forest(config: &ModelConfig) -> Result<(RandomForest, Option<CacheStatus>), TrainError> {
    let train = || -> Result<RandomForest, TrainError> {
        let started = Instant::now();
        let dataset = Dataset::generate(config.training_size, config.data_seed);
        let forest = RandomForest::fit(&dataset, config.forest_params())?;
        info!(
            samples = dataset.len(),
            estimators = forest.n_estimators(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "trained random forest"
        );
        Ok(forest)
    };

    let Some(path) = &config.cache else {
        return Ok((train()?, None));
    };

    let cache = ModelCache::new(path);
    let (forest, outcome) = cache.load_or_train(train)?;
    match &outcome {
        CacheOutcome::Loaded => info!(path = %path.display(), "loaded random forest from cache"),
        CacheOutcome::Retrained => info!(path = %path.display(), "cached freshly trained random forest"),
        CacheOutcome::Failed(e) => warn!(error = %e, "model cache unusable; using freshly trained forest"),
    }
    let status = CacheStatus::new(&cache, &outcome);
    Ok((forest, Some(status)))
}
