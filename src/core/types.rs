//! Core data types for segkit.
//!
//! This module defines the request and response shapes shared by the
//! engine and its adapters: the caller-supplied text input, the
//! index-keyed result mapping and the segmentation primitives.

use crate::core::error::{Result, SegkitError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Text submitted by a caller: one string or a batch.
///
/// Batch entries that are not strings are kept as `None` so they still
/// occupy their index and map to an empty result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    Single(String),
    Batch(Vec<Option<String>>),
}

impl TextInput {
    /// Build from a loosely-typed JSON value (string or array)
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(TextInput::Single(text)),
            Value::Array(items) => Ok(TextInput::Batch(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(text) => Some(text),
                        _ => None,
                    })
                    .collect(),
            )),
            other => Err(SegkitError::InvalidInput(format!(
                "text must be a string or an array of strings, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Entries by position; a single string is index 0
    pub fn entries(&self) -> Vec<Option<&str>> {
        match self {
            TextInput::Single(text) => vec![Some(text.as_str())],
            TextInput::Batch(items) => items.iter().map(|item| item.as_deref()).collect(),
        }
    }

    /// Number of indices in the output
    pub fn len(&self) -> usize {
        match self {
            TextInput::Single(_) => 1,
            TextInput::Batch(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'de> Deserialize<'de> for TextInput {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        TextInput::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        TextInput::Single(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        TextInput::Single(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(texts: Vec<String>) -> Self {
        TextInput::Batch(texts.into_iter().map(Some).collect())
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(texts: Vec<&str>) -> Self {
        TextInput::Batch(texts.into_iter().map(|t| Some(t.to_string())).collect())
    }
}

/// Per-input results keyed by 0-based input position.
///
/// Serializes as a JSON object with string keys (`{"0": [...], "1": [...]}`)
/// in ascending index order. Every input index is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexedResults<T>(BTreeMap<usize, T>);

impl<T> IndexedResults<T> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, index: usize, value: T) {
        self.0.insert(index, value);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&usize, &T)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> BTreeMap<usize, T> {
        self.0
    }
}

impl<T> Default for IndexedResults<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(usize, T)> for IndexedResults<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Segmentation granularity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CutMode {
    /// Non-overlapping, most precise segmentation
    #[default]
    Exact,
    /// Finer segmentation that may emit overlapping sub-words
    Search,
}

impl CutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CutMode::Exact => "exact",
            CutMode::Search => "search",
        }
    }
}

/// A token with its part-of-speech flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTag {
    pub word: String,
    pub flag: String,
}

impl PosTag {
    pub fn new(word: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            flag: flag.into(),
        }
    }
}
