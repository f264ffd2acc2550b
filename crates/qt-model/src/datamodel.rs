//! Data model catalog.
//!
//! The server publishes the types of subjects, metrics, and sources it knows
//! about. The viewer only needs their display names, to label unnamed items
//! and to fill the copy/move menus.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A subject, metric, or source type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    /// Display name of the type.
    pub name: String,

    /// Optional description shown as help text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catalog of known types keyed by type identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataModel {
    pub subjects: BTreeMap<String, EntityType>,
    pub metrics: BTreeMap<String, EntityType>,
    pub sources: BTreeMap<String, EntityType>,
}

impl DataModel {
    /// Decode a data model document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ModelError::invalid("datamodel", &e))
    }

    /// Display name for a subject type, if the type is known.
    pub fn subject_type_name(&self, type_key: &str) -> Option<&str> {
        self.subjects.get(type_key).map(|t| t.name.as_str())
    }

    /// Display name for a metric type, if the type is known.
    pub fn metric_type_name(&self, type_key: &str) -> Option<&str> {
        self.metrics.get(type_key).map(|t| t.name.as_str())
    }

    /// Display name for a source type, if the type is known.
    pub fn source_type_name(&self, type_key: &str) -> Option<&str> {
        self.sources.get(type_key).map(|t| t.name.as_str())
    }
}
