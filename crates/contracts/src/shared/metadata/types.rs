//! Field-level metadata. All values are `'static` so schemas live in statics.

use super::field_type::FieldKind;
use super::validation::ValidationRules;

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Key in the draft; matches the wire name of the field.
    pub key: &'static str,
    pub kind: FieldKind,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub fn is_required(&self) -> bool {
        self.validation.required
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    /// Adornment rendered before the input, e.g. `$`.
    pub prefix: Option<&'static str>,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            hint: None,
            prefix: None,
        }
    }
}
