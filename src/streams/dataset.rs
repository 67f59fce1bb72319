use crate::core::{CLASS_COUNT, LabeledSample};
use crate::streams::Stream;
use crate::streams::generators::SnowfallGenerator;

const MAX_PREALLOCATED: usize = 4096;

/// Ordered, immutable collection of labeled samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    samples: Vec<LabeledSample>,
}

impl Dataset {
    /// Draws exactly `n` samples from the standard snowfall generator.
    /// The same `(n, seed)` always yields the same dataset.
    pub fn generate(n: usize, seed: u64) -> Self {
        let mut generator = SnowfallGenerator::standard(Some(n), seed);
        Self::from_stream(&mut generator, n)
    }

    /// Collects at most `limit` samples from `stream`.
    pub fn from_stream(stream: &mut dyn Stream, limit: usize) -> Self {
        let mut samples = Vec::with_capacity(limit.min(MAX_PREALLOCATED));
        while samples.len() < limit {
            match stream.next_sample() {
                Some(s) => samples.push(s),
                None => break,
            }
        }
        Self { samples }
    }

    pub fn from_samples(samples: Vec<LabeledSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledSample> {
        self.samples.iter()
    }

    /// Number of samples per label, indexed by `Label::index`.
    pub fn class_counts(&self) -> [usize; CLASS_COUNT] {
        let mut counts = [0; CLASS_COUNT];
        for s in &self.samples {
            counts[s.label.index()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Label, Sample};

    #[test]
    fn generate_is_deterministic() {
        let a = Dataset::generate(100, 5);
        let b = Dataset::generate(100, 5);
        assert_eq!(a.len(), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(Dataset::generate(50, 1), Dataset::generate(50, 2));
    }

    #[test]
    fn zero_size_is_empty() {
        let d = Dataset::generate(0, 5);
        assert!(d.is_empty());
        assert_eq!(d.class_counts(), [0, 0, 0]);
    }

    #[test]
    fn all_three_classes_are_present_in_a_training_sized_set() {
        let counts = Dataset::generate(2_000, 0).class_counts();
        assert_eq!(counts.iter().sum::<usize>(), 2_000);
        assert!(counts.iter().all(|c| *c > 100), "counts={counts:?}");
    }

    #[test]
    fn from_stream_respects_limit() {
        let mut generator = SnowfallGenerator::standard(None, 4);
        let d = Dataset::from_stream(&mut generator, 25);
        assert_eq!(d.len(), 25);
    }

    #[test]
    fn from_stream_stops_when_exhausted() {
        let samples = vec![
            LabeledSample::new(Sample::new(-3.0, 90.0), Label::HeavySnow),
            LabeledSample::new(Sample::new(6.0, 20.0), Label::NoSnow),
        ];
        let mut stream = crate::testing::VecStream::new(samples.clone());
        let d = Dataset::from_stream(&mut stream, 10);
        assert_eq!(d.samples(), samples.as_slice());
        assert!(!stream.has_more_samples());
    }

    #[test]
    fn unbounded_limit_does_not_overallocate() {
        let samples = vec![LabeledSample::new(Sample::new(1.0, 55.0), Label::LightSnow); 3];
        let mut stream = crate::testing::VecStream::new(samples);
        let d = Dataset::from_stream(&mut stream, usize::MAX);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn class_counts_tally_labels() {
        let d = Dataset::from_samples(vec![
            LabeledSample::new(Sample::new(0.0, 0.0), Label::NoSnow),
            LabeledSample::new(Sample::new(0.0, 0.0), Label::HeavySnow),
            LabeledSample::new(Sample::new(0.0, 0.0), Label::HeavySnow),
        ]);
        assert_eq!(d.class_counts(), [1, 0, 2]);
    }
}
