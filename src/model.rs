//! The pre-trained poverty classifier.
//!
//! The artifact is a random forest exported from the training notebook as
//! JSON: the ordered feature names plus, per tree, a flat node array of
//! splits and leaves (leaves carry per-class sample counts). The artifact
//! carries no schema of its own, so the loader checks structure once and
//! callers must assemble features in the artifact's declared order.
//!
//! Exposes exactly two operations, mirroring the trained estimator:
//! `predict` and `predict_proba`.

use std::path::Path;

use serde::Deserialize;

/// Width of the model input: the two encoded categoricals followed by the
/// ten indicator columns.
pub const FEATURE_COUNT: usize = 12;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("cannot read model artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("model artifact {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("model artifact is malformed: {0}")]
    Malformed(String),
    #[error("feature vector has {got} elements, model expects {expected}")]
    FeatureCount { expected: usize, got: usize },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        counts: [f64; 2],
    },
}

#[derive(Debug, Deserialize)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Walk from the root to a leaf and return the leaf's normalized
    /// class distribution. Structure was validated at load, so the walk
    /// always terminates at a leaf with a positive count sum.
    fn class_distribution(&self, features: &[f64]) -> [f64; 2] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                Node::Split {
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
                Node::Leaf { counts } => {
                    let total = counts[0] + counts[1];
                    return [counts[0] / total, counts[1] / total];
                }
            }
        }
    }
}

/// The loaded classifier. Read-only for the process lifetime.
#[derive(Debug, Deserialize)]
pub struct Classifier {
    feature_names: Vec<String>,
    trees: Vec<Tree>,
}

impl Classifier {
    /// Load and structurally validate the JSON artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let classifier: Classifier =
            serde_json::from_str(&text).map_err(|source| ModelError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        classifier.validate()?;
        Ok(classifier)
    }

    /// Parse from JSON text, with the same structural validation as `load`.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let classifier: Classifier = serde_json::from_str(text).map_err(|source| {
            ModelError::Parse {
                path: "<inline>".to_string(),
                source,
            }
        })?;
        classifier.validate()?;
        Ok(classifier)
    }

    /// Structural checks that make later tree walks infallible:
    /// feature indices in range, child indices in range and strictly
    /// after their parent (so walks terminate), leaves with a positive
    /// count sum, and at least one tree.
    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.len() != FEATURE_COUNT {
            return Err(ModelError::Malformed(format!(
                "artifact declares {} feature names, expected {}",
                self.feature_names.len(),
                FEATURE_COUNT
            )));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Malformed("artifact contains no trees".into()));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::Malformed(format!("tree {t} has no nodes")));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    Node::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= FEATURE_COUNT {
                            return Err(ModelError::Malformed(format!(
                                "tree {t} node {i} splits on feature {feature}, out of range"
                            )));
                        }
                        for child in [*left, *right] {
                            if child <= i || child >= tree.nodes.len() {
                                return Err(ModelError::Malformed(format!(
                                    "tree {t} node {i} has invalid child index {child}"
                                )));
                            }
                        }
                    }
                    Node::Leaf { counts } => {
                        if counts[0] + counts[1] <= 0.0 {
                            return Err(ModelError::Malformed(format!(
                                "tree {t} node {i} is a leaf with no samples"
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Ordered feature names the artifact was trained with. Shown on the
    /// model-info page.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Class probabilities `[p_tidak_miskin, p_miskin]` for one feature
    /// vector: the mean of the per-tree leaf distributions.
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ModelError> {
        if features.len() != self.feature_names.len() {
            return Err(ModelError::FeatureCount {
                expected: self.feature_names.len(),
                got: features.len(),
            });
        }

        let mut acc = [0.0, 0.0];
        for tree in &self.trees {
            let dist = tree.class_distribution(features);
            acc[0] += dist[0];
            acc[1] += dist[1];
        }
        let n = self.trees.len() as f64;
        Ok([acc[0] / n, acc[1] / n])
    }

    /// Predicted label: the argmax class, ties resolving to class 0 the
    /// way the trained estimator does.
    pub fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        let proba = self.predict_proba(features)?;
        Ok(if proba[1] > proba[0] { 1 } else { 0 })
    }
}
