//! Draft values edited inside a modal and their promotion to a payload.

use super::metadata::{whole_i64, FieldKind, FieldMetadata};
use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;

pub const MSG_IMAGE_REQUIRED: &str = "La imagen es obligatoria";
const MSG_NOT_A_NUMBER: &str = "Ingrese un número válido";

/// Raw, unvalidated form values keyed by field key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    values: BTreeMap<&'static str, String>,
    /// Name of a selected but not yet uploaded file.
    pub pending_file: Option<String>,
    /// Image reference already persisted on the record being edited.
    pub stored_image: Option<String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Missing keys read as empty.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn attach_file(&mut self, name: impl Into<String>) {
        self.pending_file = Some(name.into());
    }

    pub fn clear_file(&mut self) {
        self.pending_file = None;
    }

    pub fn has_image(&self) -> bool {
        self.pending_file.is_some()
            || self
                .stored_image
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }

    /// Trimmed text value.
    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_string()
    }

    pub fn parse_f64(&self, key: &'static str) -> Result<f64, FieldErrors> {
        self.get(key)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| FieldErrors::single(key, MSG_NOT_A_NUMBER))
    }

    /// Accepts `"12"` as well as `"12.0"`. Values beyond `i64` are rejected.
    pub fn parse_i64(&self, key: &'static str) -> Result<i64, FieldErrors> {
        let value = self.parse_f64(key)?;
        whole_i64(value).ok_or_else(|| FieldErrors::single(key, MSG_NOT_A_NUMBER))
    }

    /// Value of a timestamp field, or the current instant for new records.
    pub fn timestamp_or_now(&self, key: &str) -> String {
        let value = self.text(key);
        if value.is_empty() {
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        } else {
            value
        }
    }
}

/// Inline validation messages, one per failing field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn single(key: &'static str, message: &'static str) -> Self {
        let mut errors = Self::default();
        errors.insert(key, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: &'static str, message: &'static str) {
        self.0.insert(key, message);
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

/// Whether a record may be saved without an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImagePolicy {
    #[default]
    Optional,
    Required,
}

/// Runs every field rule and collects all failures.
pub fn validate_fields(
    fields: &[FieldMetadata],
    draft: &FormDraft,
    policy: ImagePolicy,
) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in fields {
        let outcome = if field.kind == FieldKind::Image {
            if policy == ImagePolicy::Required && !draft.has_image() {
                Err(field.validation.message.unwrap_or(MSG_IMAGE_REQUIRED))
            } else {
                Ok(())
            }
        } else {
            field.validation.check(field.kind, draft.get(field.key))
        };
        if let Err(message) = outcome {
            errors.insert(field.key, message);
        }
    }
    errors
}

/// A record editable through the generic resource modal.
pub trait FormModel: Sized {
    type Payload: Clone + 'static;

    fn fields() -> &'static [FieldMetadata];

    /// Draft for a new record.
    fn blank_draft() -> FormDraft;

    /// Draft seeded from an existing record.
    fn to_draft(&self) -> FormDraft;

    /// Coerce a draft that already passed [`validate_fields`].
    fn build_payload(draft: &FormDraft) -> Result<Self::Payload, FieldErrors>;

    /// Validate, then coerce. Nothing is produced unless every field passes.
    fn from_draft(draft: &FormDraft, policy: ImagePolicy) -> Result<Self::Payload, FieldErrors> {
        let errors = validate_fields(Self::fields(), draft, policy);
        if !errors.is_empty() {
            return Err(errors);
        }
        Self::build_payload(draft)
    }
}
