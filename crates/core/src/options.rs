//! Codec for choice lists and multi-select values.
//!
//! Choice fields store their admin-defined option list as one TEXT column,
//! and multi-select answers store the selected values the same way. This
//! module is the only place those textual forms are produced or interpreted.
//!
//! Three stored shapes exist in the wild and all must decode:
//! - the current form, a JSON list of `{"value": ..., "label": ...}` pairs
//! - a legacy JSON list of plain strings (value and label coincide)
//! - a legacy comma-separated string
//!
//! Decoding never fails: malformed input degrades to an empty list.

use serde::{Deserialize, Serialize};

/// One selectable choice: the stored `value` and the `label` shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    /// A choice whose label equals its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        let label = value.clone();
        Self { value, label }
    }
}

/// Admin-supplied option in either accepted input shape: a bare string or a
/// `{value, label}` pair with the label optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OptionInput {
    Pair { value: String, label: Option<String> },
    Plain(String),
}

/// Normalize admin input into [`ChoiceOption`]s, defaulting absent labels to
/// the value.
pub fn normalize_options(inputs: Vec<OptionInput>) -> Vec<ChoiceOption> {
    inputs
        .into_iter()
        .map(|input| match input {
            OptionInput::Plain(value) => ChoiceOption::plain(value),
            OptionInput::Pair { value, label } => {
                let label = label.unwrap_or_else(|| value.clone());
                ChoiceOption { value, label }
            }
        })
        .collect()
}

/// Serialize an option list to its stored form.
///
/// The output is a JSON list of `{value, label}` pairs and round-trips
/// through [`decode_options`] without loss of order or labels.
pub fn encode_options(options: &[ChoiceOption]) -> String {
    serde_json::to_string(options).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored option list, tolerating every historical shape.
///
/// Absent or blank input yields an empty list, as does input that matches
/// none of the known shapes.
pub fn decode_options(raw: Option<&str>) -> Vec<ChoiceOption> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if let Ok(inputs) = serde_json::from_str::<Vec<OptionInput>>(raw) {
        return normalize_options(inputs);
    }

    // Legacy fallback: a comma-separated string. Anything that is valid JSON
    // but not a recognizable list (an object, a number) is treated as
    // unrecoverable rather than split on commas.
    if serde_json::from_str::<serde_json::Value>(raw).is_ok() {
        return Vec::new();
    }
    split_comma_list(raw)
        .into_iter()
        .map(ChoiceOption::plain)
        .collect()
}

/// Serialize a multi-select answer (the selected option values) to its
/// stored form: a JSON list of strings.
pub fn encode_choice_value(selected: &[String]) -> String {
    serde_json::to_string(selected).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored multi-select answer.
///
/// Attempts JSON list deserialization first, then falls back to splitting a
/// legacy comma-separated string. Never fails; garbage decodes to empty.
pub fn decode_choice_value(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    if let Ok(values) = serde_json::from_str::<Vec<String>>(raw) {
        return values;
    }
    if serde_json::from_str::<serde_json::Value>(raw).is_ok() {
        return Vec::new();
    }
    split_comma_list(raw)
}

fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
