use crate::core::Label;
use serde::{Deserialize, Serialize};

/// Number of input features: temperature and humidity.
pub const FEATURE_COUNT: usize = 2;

/// A weather reading. Temperature in degrees Celsius, humidity in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub temperature: f64,
    pub humidity: f64,
}

impl Sample {
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
        }
    }

    #[inline]
    pub fn feature(&self, index: usize) -> f64 {
        match index {
            0 => self.temperature,
            _ => self.humidity,
        }
    }

    pub fn features(&self) -> [f64; FEATURE_COUNT] {
        [self.temperature, self.humidity]
    }

    pub fn is_finite(&self) -> bool {
        self.temperature.is_finite() && self.humidity.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub sample: Sample,
    pub label: Label,
}

impl LabeledSample {
    pub fn new(sample: Sample, label: Label) -> Self {
        Self { sample, label }
    }
}
