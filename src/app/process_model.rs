//! The process model the deploy dialog acts on.

use serde::{Deserialize, Serialize};

/// Identifiers of a process model known to the modeler backend.
///
/// The `id` names one stored model version (used for the export artifact);
/// the `key` is the logical process definition identifier, stable across
/// versions, which suspend/activate address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessModel {
    pub id: String,
    pub key: String,
    pub name: String,
}

impl ProcessModel {
    pub fn new(id: impl Into<String>, key: impl Into<String>, name: impl Into<String>) -> Self {
        ProcessModel {
            id: id.into(),
            key: key.into(),
            name: name.into(),
        }
    }

    /// Whether the model carries enough identity to act on. The menu keeps
    /// the deploy entries disabled until this holds.
    pub fn is_actionable(&self) -> bool {
        !self.id.is_empty() && !self.key.is_empty()
    }
}
