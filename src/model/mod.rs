mod cache;
mod loader;

pub use cache::{CacheError, CacheOutcome, ModelCache};
pub use loader::{CacheStatus, LoadedModel, ModelDescription, load_model};
