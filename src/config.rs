use crate::classifiers::ForestParams;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

pub const STATIC_DIR_ENV: &str = "SNOWCAST_STATIC_DIR";

/// Which classifier serves predictions. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Threshold rule with a fixed probability table
    Heuristic,
    /// Random forest trained on synthetic data
    #[default]
    Forest,
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ModelConfig {
    /// Classifier backend, fixed for the lifetime of the process
    #[arg(long, value_enum, default_value_t = Backend::Forest, global = true)]
    pub backend: Backend,

    /// Number of synthetic samples the forest is trained on
    #[arg(long, default_value_t = 2000, global = true)]
    pub training_size: usize,

    /// Seed of the synthetic training data
    #[arg(long, default_value_t = 0, global = true)]
    pub data_seed: u64,

    /// Number of trees in the forest
    #[arg(long, default_value_t = 50, global = true)]
    pub estimators: usize,

    /// Seed for bootstrap sampling and feature selection
    #[arg(long, default_value_t = 1, global = true)]
    pub forest_seed: u64,

    /// JSON file the trained forest is cached in (optional)
    #[arg(long, global = true)]
    pub cache: Option<PathBuf>,

    /// Size of the generated holdout set used to score the model; 0 disables
    #[arg(long, default_value_t = 1000, global = true)]
    pub holdout_size: usize,

    /// Seed of the holdout set
    #[arg(long, default_value_t = 99, global = true)]
    pub holdout_seed: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Forest,
            training_size: 2000,
            data_seed: 0,
            estimators: 50,
            forest_seed: 1,
            cache: None,
            holdout_size: 1000,
            holdout_seed: 99,
        }
    }
}

impl ModelConfig {
    pub fn heuristic() -> Self {
        Self {
            backend: Backend::Heuristic,
            ..Self::default()
        }
    }

    pub fn forest_params(&self) -> ForestParams {
        ForestParams {
            n_estimators: self.estimators,
            seed: self.forest_seed,
            ..ForestParams::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ServeConfig {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Directory with the web dashboard
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            static_dir: None,
        }
    }
}

impl ServeConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Explicit flag first, then `SNOWCAST_STATIC_DIR`, then the crate's
    /// bundled `static/` directory.
    pub fn resolve_static_dir(&self) -> PathBuf {
        if let Some(dir) = &self.static_dir {
            return dir.clone();
        }
        std::env::var(STATIC_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
    }
}
