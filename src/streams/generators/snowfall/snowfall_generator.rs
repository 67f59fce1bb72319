use std::io::{Error, ErrorKind};
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{CLASS_COUNT, Label, LabeledSample, Sample};
use crate::streams::generators::snowfall::SnowRule;
use crate::streams::stream::Stream;

const TEMPERATURE_RANGE: Range<f64> = -20.0..10.0;
const HUMIDITY_RANGE: Range<f64> = 10.0..100.0;

/// Synthetic stream of labeled weather readings.
///
/// Temperature is drawn uniformly from [-20, 10) and humidity from
/// [10, 100), independently. The label comes from a [`SnowRule`]. With
/// probability `noise_probability` it is then replaced by a uniformly drawn
/// label, which may coincide with the rule's label.
///
/// Fully reproducible given the seed; [`Stream::restart`] re-seeds.
#[derive(Debug)]
pub struct SnowfallGenerator {
    seed: u64,
    rng: StdRng,
    rule: SnowRule,
    noise_probability: f64,
    max_samples: Option<usize>,
    produced: usize,
    noise_events: usize,
}

impl SnowfallGenerator {
    pub const DEFAULT_NOISE: f64 = 0.05;

    pub fn new(
        rule: SnowRule,
        noise_probability: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&noise_probability) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "noise_probability must be in 0.0..=1.0",
            ));
        }
        Ok(Self::build(rule, noise_probability, max_samples, seed))
    }

    /// Standard rule with 5% label noise.
    pub fn standard(max_samples: Option<usize>, seed: u64) -> Self {
        Self::build(SnowRule::STANDARD, Self::DEFAULT_NOISE, max_samples, seed)
    }

    fn build(
        rule: SnowRule,
        noise_probability: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            rule,
            noise_probability,
            max_samples,
            produced: 0,
            noise_events: 0,
        }
    }

    pub fn rule(&self) -> &SnowRule {
        &self.rule
    }

    /// Number of labels re-drawn by noise since the last restart.
    pub fn noise_events(&self) -> usize {
        self.noise_events
    }

    #[inline]
    fn maybe_apply_noise(&mut self, label: Label) -> Label {
        if !self.rng.random_bool(self.noise_probability) {
            return label;
        }
        self.noise_events += 1;
        let drawn = self.rng.random_range(0..CLASS_COUNT);
        Label::from_index(drawn).unwrap_or(label)
    }
}

impl Stream for SnowfallGenerator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.map_or(true, |max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<LabeledSample> {
        if !self.has_more_samples() {
            return None;
        }

        let temperature = self.rng.random_range(TEMPERATURE_RANGE);
        let humidity = self.rng.random_range(HUMIDITY_RANGE);
        let sample = Sample::new(temperature, humidity);

        let label = self.rule.classify(&sample);
        let label = self.maybe_apply_noise(label);

        self.produced += 1;
        Some(LabeledSample::new(sample, label))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        self.noise_events = 0;
        Ok(())
    }
}
