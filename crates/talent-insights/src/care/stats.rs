use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Candidate distribution stats exactly as returned by CaRe.
///
/// The document is passed through untouched; callers pick the sections they
/// need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionStats(pub Value);

/// Career progression prediction exactly as returned by CaRe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressionStats(pub Value);

impl DistributionStats {
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl ProgressionStats {
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}
