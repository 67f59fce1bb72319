use crate::classifiers::random_forest::split_criteria::SplitCriterion;
use crate::core::CLASS_COUNT;

#[derive(Debug, Clone, Copy, Default)]
pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn new() -> Self {
        Self
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn impurity(&self, counts: &[usize; CLASS_COUNT]) -> f64 {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for &c in counts {
            let rel_freq = c as f64 / total as f64;
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_node_has_zero_impurity() {
        let g = GiniSplitCriterion::new();
        assert_eq!(g.impurity(&[0, 12, 0]), 0.0);
        assert_eq!(g.impurity(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn uniform_node_is_maximally_impure() {
        let g = GiniSplitCriterion::new();
        assert!((g.impurity(&[5, 5, 5]) - 2.0 / 3.0).abs() < 1e-12);
        assert!((g.impurity(&[4, 4, 0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn perfect_partition_has_zero_weighted_impurity() {
        let g = GiniSplitCriterion::new();
        assert_eq!(g.weighted_impurity(&[3, 0, 0], &[0, 0, 9]), 0.0);
        let mixed = g.weighted_impurity(&[3, 3, 0], &[0, 0, 6]);
        assert!((mixed - 0.25).abs() < 1e-12);
    }
}
