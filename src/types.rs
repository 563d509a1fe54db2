//! Core types for the converter

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::fmt;

/// A single `property: value` pair pulled out of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Lower-cased, trimmed property name
    pub property: String,
    /// Trimmed value, case preserved
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)
    }
}

/// Insertion-ordered, duplicate-free list of class names
pub type ClassList = IndexSet<String>;

/// Space-joined rendering, as pasted into a `class` attribute
pub fn join_classes(classes: &ClassList) -> String {
    classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}

/// Out-of-scale values collected during one conversion run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionConfig {
    /// Pixel literals (`13px`) with no spacing step
    pub spacing: IndexSet<String>,
    /// Pixel literals with no radius step
    pub radius: IndexSet<String>,
    /// Raw color literals
    pub colors: IndexSet<String>,
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.spacing.is_empty() && self.radius.is_empty() && self.colors.is_empty()
    }
}

/// One theme-extension suggestion, e.g. `borderRadius: { 10px: "10px" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigEntry {
    pub key: String,
    /// A repeated key keeps its first position and takes the last value
    pub value: IndexMap<String, String>,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: IndexMap::new(),
        }
    }
}

/// Everything produced for one input text
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// All utility classes, in first-occurrence order
    pub utilities: ClassList,
    /// Classes that stand for exactly one declaration
    pub singles: ClassList,
    /// Arbitrary-value classes not already listed in `utilities`
    pub arbitrary: ClassList,
    /// `@apply` block for a reusable class, empty when there are no utilities
    pub apply_snippet: String,
    /// Theme-extension suggestions
    pub config: Vec<ConfigEntry>,
    /// Advisory notes for unsupported properties
    pub notes: Vec<String>,
}

impl ConversionResult {
    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty()
            && self.singles.is_empty()
            && self.arbitrary.is_empty()
            && self.apply_snippet.is_empty()
            && self.config.is_empty()
            && self.notes.is_empty()
    }

    pub fn config_entry(&self, key: &str) -> Option<&ConfigEntry> {
        self.config.iter().find(|entry| entry.key == key)
    }
}

/// Knobs for the reusable-class snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Class name used in the `@apply` snippet, without the leading dot
    pub class_name: String,
    /// Cascade layer wrapping the snippet
    pub layer: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            class_name: "generated-class".to_string(),
            layer: "components".to_string(),
        }
    }
}
