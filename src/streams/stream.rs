use crate::core::LabeledSample;
use std::io::Error;

/// Pull-based interface for sources that produce labeled samples.
///
/// Implementations may be finite (bounded generators, fixed datasets) or
/// unbounded.
pub trait Stream {
    /// Indicates whether the stream *may* produce more samples.
    ///
    /// If it returns `false`, a subsequent call to [`next_sample`] must
    /// return `None`.
    ///
    /// [`next_sample`]: Stream::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` once the stream is exhausted.
    fn next_sample(&mut self) -> Option<LabeledSample>;

    /// Resets the stream to its initial state. Generators re-seed their RNG
    /// so the same sequence is produced again.
    fn restart(&mut self) -> Result<(), Error>;
}
