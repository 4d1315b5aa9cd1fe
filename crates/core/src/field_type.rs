//! The closed set of custom field types.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Every type a category field can take.
///
/// Maps to the `field_kind` Postgres enum; the wire and storage labels are
/// the kebab-case variant names. Dispatch over field types happens by
/// matching on this enum, never on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "field_kind", rename_all = "kebab-case")]
pub enum FieldType {
    ShortText,
    LongText,
    Number,
    Date,
    SingleSelect,
    MultiSelect,
    SingleChoice,
    FileReference,
}

/// All field types, in display order.
pub const ALL_FIELD_TYPES: [FieldType; 8] = [
    FieldType::ShortText,
    FieldType::LongText,
    FieldType::Number,
    FieldType::Date,
    FieldType::SingleSelect,
    FieldType::MultiSelect,
    FieldType::SingleChoice,
    FieldType::FileReference,
];

impl FieldType {
    /// The storage/wire label for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::ShortText => "short-text",
            FieldType::LongText => "long-text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::SingleSelect => "single-select",
            FieldType::MultiSelect => "multi-select",
            FieldType::SingleChoice => "single-choice",
            FieldType::FileReference => "file-reference",
        }
    }

    /// Parse a storage/wire label, rejecting anything outside the enum.
    pub fn parse(label: &str) -> Result<Self, CoreError> {
        ALL_FIELD_TYPES
            .into_iter()
            .find(|t| t.as_str() == label)
            .ok_or_else(|| CoreError::Validation(format!("invalid field type '{label}'")))
    }

    /// Whether this type carries an admin-defined choice list.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FieldType::SingleSelect | FieldType::MultiSelect | FieldType::SingleChoice
        )
    }

    /// Whether stored values of this type are list-encoded.
    pub fn is_multi_valued(self) -> bool {
        matches!(self, FieldType::MultiSelect)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parse() {
        for t in ALL_FIELD_TYPES {
            assert_eq!(FieldType::parse(t.as_str()).unwrap(), t);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = FieldType::parse("dropdown").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn choice_types_are_exactly_the_select_variants() {
        let choice: Vec<_> = ALL_FIELD_TYPES.into_iter().filter(|t| t.is_choice()).collect();
        assert_eq!(
            choice,
            vec![
                FieldType::SingleSelect,
                FieldType::MultiSelect,
                FieldType::SingleChoice
            ]
        );
    }

    #[test]
    fn serde_uses_kebab_case_labels() {
        let json = serde_json::to_string(&FieldType::ShortText).unwrap();
        assert_eq!(json, "\"short-text\"");
        let back: FieldType = serde_json::from_str("\"multi-select\"").unwrap();
        assert_eq!(back, FieldType::MultiSelect);
    }

    #[test]
    fn only_multi_select_is_multi_valued() {
        for t in ALL_FIELD_TYPES {
            assert_eq!(t.is_multi_valued(), t == FieldType::MultiSelect);
        }
    }
}
