use crate::classifiers::{RandomForest, TrainError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read model cache {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write model cache {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("model cache {path} could not be decoded: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode forest: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("model cache {path} holds a malformed forest")]
    Malformed { path: PathBuf },
}

/// How the forest behind a cache was obtained.
#[derive(Debug)]
pub enum CacheOutcome {
    /// Read back from an existing artifact.
    Loaded,
    /// No artifact existed; trained and written.
    Retrained,
    /// The artifact could not be read or written; the forest was trained
    /// anyway and the error is kept for reporting.
    Failed(CacheError),
}

impl CacheOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            CacheOutcome::Loaded => "loaded",
            CacheOutcome::Retrained => "retrained",
            CacheOutcome::Failed(_) => "failed",
        }
    }

    pub fn error(&self) -> Option<&CacheError> {
        match self {
            CacheOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// On-disk JSON artifact holding a fitted [`RandomForest`].
///
/// Keyed by nothing but the file's existence: a present artifact is used
/// regardless of the parameters it was trained with.
#[derive(Debug, Clone)]
pub struct ModelCache {
    path: PathBuf,
}

impl ModelCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no artifact exists.
    pub fn load(&self) -> Result<Option<RandomForest>, CacheError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let forest: RandomForest =
            serde_json::from_slice(&bytes).map_err(|source| CacheError::Decode {
                path: self.path.clone(),
                source,
            })?;
        if !forest.is_well_formed() {
            return Err(CacheError::Malformed {
                path: self.path.clone(),
            });
        }
        Ok(Some(forest))
    }

    /// Writes through a sibling temp file so readers never see a partial
    /// artifact.
    pub fn store(&self, forest: &RandomForest) -> Result<(), CacheError> {
        let json = serde_json::to_vec(forest).map_err(CacheError::Encode)?;
        let write_err = |source: io::Error| CacheError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }

    /// Loads the cached forest, or trains one with `train` and tries to
    /// cache it. Training errors propagate; cache errors only downgrade the
    /// outcome to [`CacheOutcome::Failed`].
    pub fn load_or_train<F>(&self, train: F) -> Result<(RandomForest, CacheOutcome), TrainError>
    where
        F: FnOnce() -> Result<RandomForest, TrainError>,
    {
        match self.load() {
            Ok(Some(forest)) => Ok((forest, CacheOutcome::Loaded)),
            Ok(None) => {
                let forest = train()?;
                let outcome = match self.store(&forest) {
                    Ok(()) => CacheOutcome::Retrained,
                    Err(e) => CacheOutcome::Failed(e),
                };
                Ok((forest, outcome))
            }
            Err(load_err) => {
                let forest = train()?;
                if let Err(store_err) = self.store(&forest) {
                    warn!(error = %store_err, "could not replace unreadable model cache");
                }
                Ok((forest, CacheOutcome::Failed(load_err)))
            }
        }
    }
}
