use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classifiers::Classifier;
use crate::classifiers::random_forest::{DecisionTree, TrainError, TreeParams};
use crate::core::{CLASS_COUNT, ClassDistribution, FEATURE_COUNT, Sample};
use crate::streams::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub seed: u64,
    /// Draw a bootstrap sample per tree instead of using the full dataset.
    pub bootstrap: bool,
    pub tree: TreeParams,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 50,
            seed: 1,
            bootstrap: true,
            tree: TreeParams::default(),
        }
    }
}

/// Bagged ensemble of CART trees.
///
/// Probabilities are class-vote fractions: each tree votes once for the
/// majority class of the leaf the sample reaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    params: ForestParams,
    training_samples: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn fit(dataset: &Dataset, params: ForestParams) -> Result<Self, TrainError> {
        if dataset.is_empty() {
            return Err(TrainError::EmptyDataset);
        }
        if params.n_estimators == 0 {
            return Err(TrainError::NoEstimators);
        }
        if params.tree.max_features == 0 || params.tree.max_features > FEATURE_COUNT {
            return Err(TrainError::InvalidMaxFeatures {
                got: params.tree.max_features,
                limit: FEATURE_COUNT,
            });
        }
        if let Some(index) = dataset.iter().position(|s| !s.sample.is_finite()) {
            return Err(TrainError::NonFiniteSample { index });
        }

        let samples = dataset.samples();
        let n = samples.len();
        let mut master = StdRng::seed_from_u64(params.seed);

        let trees = (0..params.n_estimators)
            .map(|_| {
                let mut rng = StdRng::seed_from_u64(master.random());
                let indices: Vec<usize> = if params.bootstrap {
                    (0..n).map(|_| rng.random_range(0..n)).collect()
                } else {
                    (0..n).collect()
                };
                DecisionTree::fit(samples, indices, &params.tree, &mut rng)
            })
            .collect::<Vec<_>>();

        debug!(
            trees = trees.len(),
            samples = n,
            mean_depth = trees.iter().map(DecisionTree::depth).sum::<usize>() as f64
                / trees.len() as f64,
            "random forest fitted"
        );

        Ok(Self {
            params,
            training_samples: n,
            trees,
        })
    }

    pub fn params(&self) -> &ForestParams {
        &self.params
    }

    /// Size of the dataset the forest was fitted on.
    pub fn training_samples(&self) -> usize {
        self.training_samples
    }

    pub fn n_estimators(&self) -> usize {
        self.trees.len()
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// True when the forest has at least one tree and every tree is
    /// structurally sound.
    pub fn is_well_formed(&self) -> bool {
        !self.trees.is_empty() && self.trees.iter().all(DecisionTree::is_well_formed)
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &'static str {
        "random-forest"
    }

    fn predict_probabilities(&self, sample: &Sample) -> ClassDistribution {
        let mut votes = [0.0; CLASS_COUNT];
        for tree in &self.trees {
            votes[tree.vote(sample).index()] += 1.0;
        }
        ClassDistribution::from_votes(votes)
    }
}
