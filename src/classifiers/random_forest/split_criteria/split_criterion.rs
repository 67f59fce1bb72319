use crate::core::CLASS_COUNT;

pub trait SplitCriterion {
    /// Impurity of a node holding `counts` samples per class.
    fn impurity(&self, counts: &[usize; CLASS_COUNT]) -> f64;

    /// Size-weighted impurity of a binary partition.
    fn weighted_impurity(&self, left: &[usize; CLASS_COUNT], right: &[usize; CLASS_COUNT]) -> f64 {
        let n_left: usize = left.iter().sum();
        let n_right: usize = right.iter().sum();
        let total = (n_left + n_right) as f64;
        if total == 0.0 {
            return 0.0;
        }
        (n_left as f64 * self.impurity(left) + n_right as f64 * self.impurity(right)) / total
    }
}
