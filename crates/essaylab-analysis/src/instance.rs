//! Scored essay records
//!
//! Instances are produced upstream by the feature extraction pipeline and are
//! read-only here. The JSON layout of an instance file is:
//!
//! ```json
//! {
//!   "instances": [
//!     {
//!       "id": 1,
//!       "set": 1,
//!       "domain1_score": 8,
//!       "features": { "grade": 7.5, "word_count": 350.0 }
//!     }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("feature '{feature}' is not defined on instance {id}")]
pub struct UnknownFeatureError {
    pub feature: String,
    pub id: u32,
}

/// One scored essay with its named feature values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EssayInstance {
    /// Identifier, unique within a collection
    pub id: u32,
    /// Essay set (task/prompt) this essay was written for
    pub set: u32,
    /// Human-assigned gold score
    pub domain1_score: i32,
    /// Feature values by feature name
    #[serde(default)]
    pub features: BTreeMap<String, f64>,
}

impl EssayInstance {
    #[must_use]
    pub fn new(id: u32, set: u32, domain1_score: i32) -> Self {
        Self {
            id,
            set,
            domain1_score,
            features: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_feature<S>(mut self, name: S, value: f64) -> Self
    where
        S: Into<String>,
    {
        self.features.insert(name.into(), value);
        self
    }

    /// Looks up the value of the named feature.
    pub fn feature(&self, name: &str) -> Result<f64, UnknownFeatureError> {
        self.features
            .get(name)
            .copied()
            .ok_or_else(|| UnknownFeatureError {
                feature: name.to_owned(),
                id: self.id,
            })
    }

    /// Names of the features defined on this instance, in name order.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }
}

/// A file-level collection of essay instances.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InstanceCollection {
    pub instances: Vec<EssayInstance>,
}

impl InstanceCollection {
    /// Number of instances in each essay set, keyed by set id.
    #[must_use]
    pub fn set_sizes(&self) -> BTreeMap<u32, usize> {
        let mut sizes = BTreeMap::new();
        for instance in &self.instances {
            *sizes.entry(instance.set).or_insert(0) += 1;
        }
        sizes
    }
}
