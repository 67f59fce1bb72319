use crate::core::{CLASS_COUNT, Label};
use serde::{Deserialize, Serialize};

const SUM_TOLERANCE: f64 = 1e-9;

/// Probability of each [`Label`], indexed by [`Label::index`].
///
/// Always holds exactly one non-negative entry per label, summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassDistribution([f64; CLASS_COUNT]);

impl ClassDistribution {
    /// Wraps a table that is already normalized.
    pub const fn from_table(table: [f64; CLASS_COUNT]) -> Self {
        Self(table)
    }

    /// Normalizes raw, non-negative votes. All-zero or non-finite votes
    /// yield the uniform distribution.
    pub fn from_votes(votes: [f64; CLASS_COUNT]) -> Self {
        let total: f64 = votes.iter().map(|v| v.max(0.0)).sum();
        if !total.is_finite() || total <= 0.0 {
            return Self::uniform();
        }
        let mut out = [0.0; CLASS_COUNT];
        for (o, v) in out.iter_mut().zip(votes) {
            *o = v.max(0.0) / total;
        }
        Self(out)
    }

    pub fn uniform() -> Self {
        Self([1.0 / CLASS_COUNT as f64; CLASS_COUNT])
    }

    pub fn probability(&self, label: Label) -> f64 {
        self.0[label.index()]
    }

    pub fn as_array(&self) -> [f64; CLASS_COUNT] {
        self.0
    }

    /// Most probable label; ties resolve to the less severe class.
    pub fn most_likely(&self) -> Label {
        let mut best = 0;
        for i in 1..CLASS_COUNT {
            if self.0[i] > self.0[best] {
                best = i;
            }
        }
        Label::from_index(best).unwrap_or(Label::NoSnow)
    }

    pub fn is_normalized(&self) -> bool {
        let sum: f64 = self.0.iter().sum();
        self.0.iter().all(|p| *p >= 0.0 && p.is_finite()) && (sum - 1.0).abs() <= SUM_TOLERANCE
    }
}
