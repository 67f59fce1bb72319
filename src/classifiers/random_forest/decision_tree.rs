use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::classifiers::random_forest::split_criteria::{GiniSplitCriterion, SplitCriterion};
use crate::core::{CLASS_COUNT, FEATURE_COUNT, Label, LabeledSample, Sample};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Features examined per split before settling for the best one found.
    pub max_features: usize,
    pub min_samples_split: usize,
    pub max_depth: Option<usize>,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_features: 1,
            min_samples_split: 2,
            max_depth: None,
        }
    }
}

/// Node of a [`DecisionTree`]. Children always sit at higher indices than
/// their parent, so traversal from the root terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Leaf {
        class_counts: [usize; CLASS_COUNT],
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

#[derive(Debug, Clone, Copy)]
struct BestSplit {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

/// CART classification tree over the two weather features.
///
/// Samples with `feature <= threshold` go left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Grows a tree on `samples[i]` for every `i` in `indices`. Indices may
    /// repeat (bootstrap draws). `indices` must not be empty.
    pub fn fit<R: Rng>(
        samples: &[LabeledSample],
        indices: Vec<usize>,
        params: &TreeParams,
        rng: &mut R,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        let criterion = GiniSplitCriterion::new();
        tree.grow(samples, indices, 0, params, &criterion, rng);
        tree
    }

    fn grow<R: Rng>(
        &mut self,
        samples: &[LabeledSample],
        indices: Vec<usize>,
        depth: usize,
        params: &TreeParams,
        criterion: &GiniSplitCriterion,
        rng: &mut R,
    ) -> usize {
        let counts = class_counts(samples, &indices);
        let node_index = self.nodes.len();
        self.nodes.push(TreeNode::Leaf {
            class_counts: counts,
        });

        let depth_exhausted = params.max_depth.is_some_and(|max| depth >= max);
        if depth_exhausted
            || indices.len() < params.min_samples_split
            || criterion.impurity(&counts) == 0.0
        {
            return node_index;
        }

        let Some(best) = find_best_split(samples, &indices, params, criterion, rng) else {
            return node_index;
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| samples[i].sample.feature(best.feature) <= best.threshold);

        let left_index = self.grow(samples, left, depth + 1, params, criterion, rng);
        let right_index = self.grow(samples, right, depth + 1, params, criterion, rng);

        self.nodes[node_index] = TreeNode::Split {
            feature: best.feature,
            threshold: best.threshold,
            left: left_index,
            right: right_index,
        };
        node_index
    }

    /// Class counts of the leaf `sample` falls into.
    pub fn leaf_counts(&self, sample: &Sample) -> [usize; CLASS_COUNT] {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { class_counts }) => return *class_counts,
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    index = if sample.feature(*feature) <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                None => return [0; CLASS_COUNT],
            }
        }
    }

    /// Majority class of the reached leaf; ties go to the less severe class.
    pub fn vote(&self, sample: &Sample) -> Label {
        let counts = self.leaf_counts(sample);
        let mut best = 0;
        for i in 1..CLASS_COUNT {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        Label::from_index(best).unwrap_or(Label::NoSnow)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, TreeNode::Leaf { .. }))
            .count()
    }

    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[TreeNode], index: usize) -> usize {
            match nodes.get(index) {
                Some(TreeNode::Split { left, right, .. }) => {
                    1 + depth_of(nodes, *left).max(depth_of(nodes, *right))
                }
                _ => 0,
            }
        }
        depth_of(&self.nodes, 0)
    }

    /// Structural check for trees that did not come from [`fit`], e.g. ones
    /// read back from disk.
    ///
    /// [`fit`]: DecisionTree::fit
    pub fn is_well_formed(&self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        self.nodes.iter().enumerate().all(|(i, node)| match node {
            TreeNode::Leaf { .. } => true,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                *feature < FEATURE_COUNT
                    && threshold.is_finite()
                    && *left > i
                    && *right > i
                    && *left < self.nodes.len()
                    && *right < self.nodes.len()
            }
        })
    }
}

fn class_counts(samples: &[LabeledSample], indices: &[usize]) -> [usize; CLASS_COUNT] {
    let mut counts = [0; CLASS_COUNT];
    for &i in indices {
        counts[samples[i].label.index()] += 1;
    }
    counts
}

/// Examines features in random order. Stops after `max_features` of them
/// once a valid split exists; keeps going past that limit otherwise.
fn find_best_split<R: Rng>(
    samples: &[LabeledSample],
    indices: &[usize],
    params: &TreeParams,
    criterion: &GiniSplitCriterion,
    rng: &mut R,
) -> Option<BestSplit> {
    let mut features: Vec<usize> = (0..FEATURE_COUNT).collect();
    features.shuffle(rng);

    let mut best: Option<BestSplit> = None;
    for (visited, &feature) in features.iter().enumerate() {
        if visited >= params.max_features && best.is_some() {
            break;
        }
        if let Some(candidate) = best_split_on_feature(samples, indices, feature, criterion) {
            if best.is_none_or(|b| candidate.impurity < b.impurity) {
                best = Some(candidate);
            }
        }
    }
    best
}

fn best_split_on_feature(
    samples: &[LabeledSample],
    indices: &[usize],
    feature: usize,
    criterion: &GiniSplitCriterion,
) -> Option<BestSplit> {
    let mut sorted: Vec<(f64, usize)> = indices
        .iter()
        .map(|&i| (samples[i].sample.feature(feature), samples[i].label.index()))
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut right = [0usize; CLASS_COUNT];
    for &(_, class) in &sorted {
        right[class] += 1;
    }
    let mut left = [0usize; CLASS_COUNT];

    let mut best: Option<BestSplit> = None;
    for pos in 1..sorted.len() {
        let (prev_value, prev_class) = sorted[pos - 1];
        left[prev_class] += 1;
        right[prev_class] -= 1;

        let value = sorted[pos].0;
        if prev_value >= value {
            continue;
        }

        let impurity = criterion.weighted_impurity(&left, &right);
        if best.is_none_or(|b| impurity < b.impurity) {
            let mut threshold = prev_value + (value - prev_value) / 2.0;
            if threshold >= value {
                threshold = prev_value;
            }
            best = Some(BestSplit {
                feature,
                threshold,
                impurity,
            });
        }
    }
    best
}
