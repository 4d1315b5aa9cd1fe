//! Field definition validation.
//!
//! Every schema write (add or update of a field) passes through
//! [`FieldDefinition::parse`], which turns the raw admin payload into a
//! validated definition or a [`CoreError::Validation`] with a field-level
//! message.

use serde::Deserialize;

use crate::error::CoreError;
use crate::field_type::FieldType;
use crate::options::{normalize_options, ChoiceOption, OptionInput};

/// Raw field definition as submitted by the admin UI.
///
/// Everything is optional so that missing parts surface as validation
/// messages instead of deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDefinitionInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub required: Option<bool>,
    pub placeholder: Option<String>,
    pub options: Option<Vec<OptionInput>>,
}

/// A validated field definition, ready to persist.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Empty for non-choice types, non-empty for choice types.
    pub options: Vec<ChoiceOption>,
}

impl FieldDefinition {
    /// Validate a raw definition.
    ///
    /// Rules:
    /// - `name` must be present and non-blank
    /// - `type` must be present and a member of [`FieldType`]
    /// - choice types must carry a non-empty option list
    /// - non-choice types must not carry options
    pub fn parse(input: FieldDefinitionInput) -> Result<Self, CoreError> {
        let name = input
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| CoreError::Validation("field name is required".to_string()))?
            .to_string();

        let type_label = input
            .field_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| CoreError::Validation("field type is required".to_string()))?;
        let field_type = FieldType::parse(type_label)?;

        let options = normalize_options(input.options.unwrap_or_default());
        if field_type.is_choice() && options.is_empty() {
            return Err(CoreError::Validation(format!(
                "field type '{field_type}' requires a non-empty options list"
            )));
        }
        if !field_type.is_choice() && !options.is_empty() {
            return Err(CoreError::Validation(format!(
                "field type '{field_type}' does not take options"
            )));
        }

        let placeholder = input
            .placeholder
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        Ok(Self {
            name,
            field_type,
            required: input.required.unwrap_or(false),
            placeholder,
            options,
        })
    }
}
