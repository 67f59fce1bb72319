use crate::core::{CLASS_COUNT, Label};
use serde::Serialize;

/// Counts of (true, predicted) label pairs. Rows are true labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfusionMatrix([[u64; CLASS_COUNT]; CLASS_COUNT]);

impl ConfusionMatrix {
    pub fn add(&mut self, truth: Label, predicted: Label) {
        self.0[truth.index()][predicted.index()] += 1;
    }

    pub fn count(&self, truth: Label, predicted: Label) -> u64 {
        self.0[truth.index()][predicted.index()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().flatten().sum()
    }

    fn correct(&self) -> u64 {
        (0..CLASS_COUNT).map(|c| self.0[c][c]).sum()
    }

    fn row_total(&self, c: usize) -> u64 {
        self.0[c].iter().sum()
    }

    fn col_total(&self, c: usize) -> u64 {
        self.0.iter().map(|row| row[c]).sum()
    }

    /// NaN when empty.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return f64::NAN;
        }
        self.correct() as f64 / total as f64
    }

    /// Cohen's kappa; 0.0 when empty, NaN when chance agreement is total.
    pub fn kappa(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let n = total as f64;
        let p_o = self.correct() as f64 / n;
        let mut p_e = 0.0;
        for c in 0..CLASS_COUNT {
            p_e += (self.row_total(c) as f64 / n) * (self.col_total(c) as f64 / n);
        }
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }

    /// Recall per true label; NaN for labels never seen.
    pub fn recall(&self, label: Label) -> f64 {
        let c = label.index();
        let row = self.row_total(c);
        if row == 0 {
            return f64::NAN;
        }
        self.0[c][c] as f64 / row as f64
    }

    /// Precision per predicted label; NaN for labels never predicted.
    pub fn precision(&self, label: Label) -> f64 {
        let c = label.index();
        let col = self.col_total(c);
        if col == 0 {
            return f64::NAN;
        }
        self.0[c][c] as f64 / col as f64
    }

    /// Harmonic mean of precision and recall; NaN when either is undefined,
    /// 0.0 when both are zero.
    pub fn f1(&self, label: Label) -> f64 {
        let p = self.precision(label);
        let r = self.recall(label);
        if p.is_nan() || r.is_nan() {
            return f64::NAN;
        }
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }
}
