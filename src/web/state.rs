use crate::model::{LoadedModel, ModelDescription};
use crate::prediction::Predictor;
use std::sync::Arc;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
    pub model: Arc<ModelDescription>,
}

impl AppState {
    pub fn new(predictor: Predictor, model: ModelDescription) -> Self {
        Self {
            predictor,
            model: Arc::new(model),
        }
    }
}

impl From<LoadedModel> for AppState {
    fn from(loaded: LoadedModel) -> Self {
        Self::new(Predictor::new(loaded.classifier), loaded.description)
    }
}
