mod dataset;
pub mod generators;
mod stream;

pub use dataset::Dataset;
pub use stream::Stream;
