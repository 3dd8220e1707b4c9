use super::aggregate::{Category, CategoryCreate};
use crate::domain::common::Status;
use crate::shared::form::{FieldErrors, FormDraft, FormModel};
use crate::shared::metadata::{FieldKind, FieldMetadata, FieldUiMetadata, ValidationRules};

pub const KEY_TYPE: &str = "tipoProducto";
pub const KEY_DESCRIPTION: &str = "tipoDescripcion";
pub const KEY_STATUS: &str = "estado";
pub const KEY_CREATED_AT: &str = "fecha_creacion";

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        key: KEY_TYPE,
        kind: FieldKind::Text,
        ui: FieldUiMetadata {
            placeholder: Some("Bebidas, Postres..."),
            ..FieldUiMetadata::labeled("Tipo de Producto")
        },
        validation: ValidationRules::required()
            .with_max_length(100)
            .with_message("El tipo de producto es obligatorio"),
    },
    FieldMetadata {
        key: KEY_DESCRIPTION,
        kind: FieldKind::TextArea,
        ui: FieldUiMetadata::labeled("Descripción"),
        validation: ValidationRules::none(),
    },
    FieldMetadata {
        key: KEY_STATUS,
        kind: FieldKind::Status,
        ui: FieldUiMetadata::labeled("Estado"),
        validation: ValidationRules::none(),
    },
];

impl FormModel for Category {
    type Payload = CategoryCreate;

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn blank_draft() -> FormDraft {
        FormDraft::new().with(KEY_STATUS, Status::Active.code().to_string())
    }

    fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with(KEY_TYPE, self.product_type.clone())
            .with(KEY_DESCRIPTION, self.description.clone())
            .with(KEY_STATUS, self.status.code().to_string())
            .with(KEY_CREATED_AT, self.created_at.clone())
    }

    fn build_payload(draft: &FormDraft) -> Result<CategoryCreate, FieldErrors> {
        Ok(CategoryCreate {
            product_type: draft.text(KEY_TYPE),
            description: draft.text(KEY_DESCRIPTION),
            status: Status::from_code(draft.parse_i64(KEY_STATUS)?),
            created_at: draft.timestamp_or_now(KEY_CREATED_AT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_category::CategoryId;
    use crate::shared::form::ImagePolicy;

    #[test]
    fn test_new_category_payload() {
        let draft = Category::blank_draft()
            .with(KEY_TYPE, "Bebidas")
            .with(KEY_DESCRIPTION, "Bebidas frías y calientes");
        let payload = Category::from_draft(&draft, ImagePolicy::Optional).unwrap();
        assert_eq!(payload.product_type, "Bebidas");
        assert_eq!(payload.description, "Bebidas frías y calientes");
        assert_eq!(payload.status, Status::Active);
        assert!(!payload.created_at.is_empty());
    }

    #[test]
    fn test_blank_type_rejected() {
        let draft = Category::blank_draft().with(KEY_TYPE, "  ");
        let errors = Category::from_draft(&draft, ImagePolicy::Optional).unwrap_err();
        assert_eq!(errors.get(KEY_TYPE), Some("El tipo de producto es obligatorio"));
    }

    #[test]
    fn test_edit_keeps_creation_date() {
        let category = Category {
            id: CategoryId(3),
            product_type: "Postres".into(),
            description: String::new(),
            status: Status::Inactive,
            created_at: "2024-01-02T03:04:05.000Z".into(),
        };
        let payload = Category::from_draft(&category.to_draft(), ImagePolicy::Optional).unwrap();
        assert_eq!(payload.status, Status::Inactive);
        assert_eq!(payload.created_at, "2024-01-02T03:04:05.000Z");
    }
}
