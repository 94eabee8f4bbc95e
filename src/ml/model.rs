// ============================================================
// Layer 4 — Gradient-Boosted Tree Model
// ============================================================
// The artifact is a JSON document produced by the (external)
// training pipeline:
//
//   {
//     "feature_names": ["Job Role Match", ...],   ← 7 columns
//     "base_score": 0.0,
//     "trees": [ { "nodes": [ ... ] }, ... ]
//   }
//
// Each tree is a flat array of nodes indexed by position.
// A node is either a split (feature, threshold, left, right)
// or a leaf (value). Evaluation starts at node 0 of every
// tree: go left when x[feature] <= threshold, right otherwise,
// add the reached leaf's value to the running score. The
// predicted class is 1 when the final score is positive.
//
// The training process itself is out of scope — this layer
// only evaluates what the artifact says. Structural problems
// in the artifact (a split pointing at column 9, a child index
// past the end of the node array) surface as per-request
// inference errors, never as panics.

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::domain::features::FEATURE_COLUMNS;
use crate::domain::traits::Classifier;

/// Upper bound on the number of hops through one tree.
/// A well-formed tree of depth d needs d hops; anything past
/// the node count means the artifact contains a cycle.
const MAX_TREE_DEPTH_FACTOR: usize = 1;

/// One node of a decision tree. Untagged: a node with a
/// "value" key is a leaf, one with "feature"/"threshold"/
/// "left"/"right" is a split.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature:   usize,
        threshold: f64,
        left:      usize,
        right:     usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single decision tree: nodes indexed by position, root at 0.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk from the root to a leaf and return the leaf value.
    fn evaluate(&self, features: &[f64; 7]) -> Result<f64> {
        if self.nodes.is_empty() {
            bail!("model artifact contains an empty tree");
        }

        let mut idx  = 0usize;
        // One hop per node is the most any acyclic walk can take
        let mut hops = self.nodes.len() * MAX_TREE_DEPTH_FACTOR + 1;

        loop {
            if hops == 0 {
                bail!("model artifact contains a cyclic tree");
            }
            hops -= 1;

            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let Some(x) = features.get(*feature) else {
                        bail!(
                            "model artifact references feature column {} \
                             but only {} columns exist",
                            feature,
                            features.len(),
                        );
                    };
                    idx = if *x <= *threshold { *left } else { *right };
                }
                None => bail!(
                    "model artifact references node {} past the end of the tree",
                    idx,
                ),
            }
        }
    }
}

/// The loaded tree-ensemble classifier. Immutable after
/// deserialization — one instance is shared across all
/// requests for the lifetime of the process.
#[derive(Debug, Clone, Deserialize)]
pub struct GbdtModel {
    /// The feature columns the trees were trained on, in order
    pub feature_names: Vec<String>,
    /// Score before any tree contributes (log-odds prior)
    pub base_score: f64,
    /// The boosted trees, evaluated in sequence
    pub trees: Vec<Tree>,
}

impl GbdtModel {
    /// Deserialize an artifact from its JSON text and check
    /// its recorded columns against the layout this service
    /// encodes. The model's behavior for mismatched columns is
    /// undefined, so a mismatched artifact is refused outright
    /// rather than consulted.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: GbdtModel = serde_json::from_str(json)?;
        model.check_columns()?;
        Ok(model)
    }

    fn check_columns(&self) -> Result<()> {
        if self.feature_names != FEATURE_COLUMNS {
            bail!(
                "model artifact was trained on columns {:?} but this service \
                 encodes {:?}",
                self.feature_names,
                FEATURE_COLUMNS,
            );
        }
        Ok(())
    }

    /// Number of trees in the ensemble (for startup logging)
    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Raw additive score for one record
    fn score(&self, features: &[f64; 7]) -> Result<f64> {
        let mut score = self.base_score;
        for tree in &self.trees {
            score += tree.evaluate(features)?;
        }
        Ok(score)
    }
}

impl Classifier for GbdtModel {
    /// Binary decision: positive score → class 1 (stay).
    fn predict(&self, features: &[f64; 7]) -> Result<u32> {
        let score = self.score(features)?;
        Ok(u32::from(score > 0.0))
    }
}
