use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One node of the exported tree. The training side flattens the fitted
/// tree into a node table with index 0 as the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A trained decision-tree regressor, applied as-is; this crate never fits
/// or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeRegressor {
    nodes: Vec<TreeNode>,
}

impl DecisionTreeRegressor {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    /// Checks the node table is usable before any prediction: non-empty,
    /// child indices in range and strictly increasing (which rules out
    /// cycles), feature indices inside the feature vector.
    pub fn validate(&self, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::ModelBundle("regressor has no nodes".to_string()));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= n_features {
                    return Err(Error::ModelBundle(format!(
                        "split node {} references feature {} of {}",
                        idx, feature, n_features
                    )));
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(Error::ModelBundle(format!(
                        "split node {} has out-of-range children",
                        idx
                    )));
                }
                if *left <= idx || *right <= idx {
                    return Err(Error::ModelBundle(format!(
                        "split node {} has non-forward children",
                        idx
                    )));
                }
            }
        }
        Ok(())
    }

    /// Walks from the root to a leaf. The split rule matches the exporter:
    /// left when `features[feature] <= threshold`.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}
