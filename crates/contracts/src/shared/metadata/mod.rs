//! Field schemas for resource forms
//!
//! Every editable resource describes its form as a static slice of
//! [`FieldMetadata`]. The generic modal renders inputs from it and
//! [`ValidationRules`] decides, per field, whether a raw input is acceptable.
//!
//! ```rust,ignore
//! use contracts::shared::metadata::FieldMetadata;
//!
//! for field in Product::fields() {
//!     println!("{}: {}", field.key, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldKind;
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
pub(crate) use validation::whole_i64;
