use super::aggregate::{Product, ProductPayload};
use crate::domain::a001_category::CategoryId;
use crate::domain::common::Status;
use crate::shared::form::{FieldErrors, FormDraft, FormModel};
use crate::shared::metadata::{FieldKind, FieldMetadata, FieldUiMetadata, ValidationRules};

pub const KEY_NAME: &str = "nombre";
pub const KEY_DESCRIPTION: &str = "descripcion";
pub const KEY_PRICE: &str = "precio";
pub const KEY_COST: &str = "costo";
pub const KEY_STOCK: &str = "stock";
pub const KEY_CATEGORY: &str = "id_categoria";
pub const KEY_STATUS: &str = "estado";
pub const KEY_IMAGE: &str = "imagen";
pub const KEY_CREATED_AT: &str = "fecha_creacion";

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata {
        key: KEY_NAME,
        kind: FieldKind::Text,
        ui: FieldUiMetadata::labeled("Nombre del Producto"),
        validation: ValidationRules::required()
            .with_max_length(150)
            .with_message("El nombre es obligatorio"),
    },
    FieldMetadata {
        key: KEY_DESCRIPTION,
        kind: FieldKind::TextArea,
        ui: FieldUiMetadata::labeled("Descripción"),
        validation: ValidationRules::none(),
    },
    FieldMetadata {
        key: KEY_PRICE,
        kind: FieldKind::Money,
        ui: FieldUiMetadata {
            prefix: Some("$"),
            ..FieldUiMetadata::labeled("Precio")
        },
        validation: ValidationRules::positive().with_message("Ingrese un precio válido"),
    },
    FieldMetadata {
        key: KEY_COST,
        kind: FieldKind::Money,
        ui: FieldUiMetadata {
            prefix: Some("$"),
            ..FieldUiMetadata::labeled("Costo")
        },
        validation: ValidationRules::non_negative().with_message("Ingrese un costo válido"),
    },
    FieldMetadata {
        key: KEY_STOCK,
        kind: FieldKind::Integer,
        ui: FieldUiMetadata::labeled("Stock"),
        validation: ValidationRules::non_negative_integer().with_message("Ingrese un stock válido"),
    },
    FieldMetadata {
        key: KEY_CATEGORY,
        kind: FieldKind::Reference,
        ui: FieldUiMetadata::labeled("Categoría"),
        validation: ValidationRules::selection().with_message("Seleccione una categoría"),
    },
    FieldMetadata {
        key: KEY_STATUS,
        kind: FieldKind::Status,
        ui: FieldUiMetadata::labeled("Estado"),
        validation: ValidationRules::none(),
    },
    FieldMetadata {
        key: KEY_IMAGE,
        kind: FieldKind::Image,
        ui: FieldUiMetadata {
            hint: Some("Formatos aceptados: JPG, PNG, GIF. Tamaño máximo: 5MB"),
            ..FieldUiMetadata::labeled("Imagen")
        },
        validation: ValidationRules::none(),
    },
];

impl FormModel for Product {
    type Payload = ProductPayload;

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn blank_draft() -> FormDraft {
        FormDraft::new()
            .with(KEY_STOCK, "0")
            .with(KEY_CATEGORY, "0")
            .with(KEY_STATUS, Status::Active.code().to_string())
    }

    fn to_draft(&self) -> FormDraft {
        let mut draft = FormDraft::new()
            .with(KEY_NAME, self.name.clone())
            .with(KEY_DESCRIPTION, self.description.clone())
            .with(KEY_PRICE, self.price.to_string())
            .with(KEY_COST, self.cost.to_string())
            .with(KEY_STOCK, self.stock.to_string())
            .with(KEY_CATEGORY, self.category_id.to_string())
            .with(KEY_STATUS, self.status.code().to_string())
            .with(KEY_CREATED_AT, self.created_at.clone());
        draft.stored_image = self.image.clone();
        draft
    }

    /// The image stays whatever is already stored; a pending file replaces it
    /// only after a successful upload.
    fn build_payload(draft: &FormDraft) -> Result<ProductPayload, FieldErrors> {
        Ok(ProductPayload {
            name: draft.text(KEY_NAME),
            description: draft.text(KEY_DESCRIPTION),
            price: draft.parse_f64(KEY_PRICE)?,
            cost: draft.parse_f64(KEY_COST)?,
            stock: draft.parse_i64(KEY_STOCK)?,
            image: draft.stored_image.clone(),
            category_id: CategoryId(draft.parse_i64(KEY_CATEGORY)?),
            status: Status::from_code(draft.parse_i64(KEY_STATUS)?),
            created_at: draft.timestamp_or_now(KEY_CREATED_AT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::ImagePolicy;

    fn valid_draft() -> FormDraft {
        Product::blank_draft()
            .with(KEY_NAME, "Café Colombiano")
            .with(KEY_PRICE, "3.50")
            .with(KEY_COST, "1.20")
            .with(KEY_STOCK, "10")
            .with(KEY_CATEGORY, "2")
    }

    fn check(draft: &FormDraft) -> Result<ProductPayload, FieldErrors> {
        Product::from_draft(draft, ImagePolicy::Optional)
    }

    #[test]
    fn test_valid_product() {
        let payload = check(&valid_draft()).unwrap();
        assert_eq!(payload.name, "Café Colombiano");
        assert_eq!(payload.price, 3.5);
        assert_eq!(payload.cost, 1.2);
        assert_eq!(payload.stock, 10);
        assert_eq!(payload.category_id, CategoryId(2));
        assert_eq!(payload.image, None);
    }

    #[test]
    fn test_name_required() {
        let errors = check(&valid_draft().with(KEY_NAME, "   ")).unwrap_err();
        assert_eq!(errors.get(KEY_NAME), Some("El nombre es obligatorio"));
    }

    #[test]
    fn test_name_length_uses_trimmed_text() {
        let padded = format!("Latte{}", " ".repeat(200));
        assert_eq!(check(&valid_draft().with(KEY_NAME, padded)).unwrap().name, "Latte");

        let errors = check(&valid_draft().with(KEY_NAME, "a".repeat(151))).unwrap_err();
        assert_eq!(errors.get(KEY_NAME), Some("Texto demasiado largo"));
    }

    #[test]
    fn test_stock_beyond_i64_rejected() {
        let errors = check(&valid_draft().with(KEY_STOCK, "1e30")).unwrap_err();
        assert_eq!(errors.get(KEY_STOCK), Some("Ingrese un stock válido"));
        assert_eq!(check(&valid_draft().with(KEY_STOCK, "1e3")).unwrap().stock, 1000);
    }

    #[test]
    fn test_price_boundary() {
        assert!(check(&valid_draft().with(KEY_PRICE, "0.01")).is_ok());
        let errors = check(&valid_draft().with(KEY_PRICE, "0")).unwrap_err();
        assert_eq!(errors.get(KEY_PRICE), Some("Ingrese un precio válido"));
        assert!(check(&valid_draft().with(KEY_PRICE, "-1")).is_err());
        assert!(check(&valid_draft().with(KEY_PRICE, "")).is_err());
    }

    #[test]
    fn test_cost_boundary() {
        assert_eq!(check(&valid_draft().with(KEY_COST, "0")).unwrap().cost, 0.0);
        let errors = check(&valid_draft().with(KEY_COST, "-0.01")).unwrap_err();
        assert_eq!(errors.get(KEY_COST), Some("Ingrese un costo válido"));
    }

    #[test]
    fn test_category_required() {
        let errors = check(&valid_draft().with(KEY_CATEGORY, "0")).unwrap_err();
        assert_eq!(errors.get(KEY_CATEGORY), Some("Seleccione una categoría"));
        assert!(check(&valid_draft().with(KEY_CATEGORY, "41")).is_ok());
    }

    #[test]
    fn test_every_failure_reported() {
        let errors = check(&Product::blank_draft()).unwrap_err();
        assert!(errors.get(KEY_NAME).is_some());
        assert!(errors.get(KEY_PRICE).is_some());
        assert!(errors.get(KEY_COST).is_some());
        assert!(errors.get(KEY_CATEGORY).is_some());
        assert!(errors.get(KEY_STOCK).is_none());
    }

    #[test]
    fn test_edit_keeps_stored_image() {
        let mut draft = valid_draft();
        draft.stored_image = Some("latte.png".into());
        let payload = Product::from_draft(&draft, ImagePolicy::Required).unwrap();
        assert_eq!(payload.image.as_deref(), Some("latte.png"));
    }

    #[test]
    fn test_required_image_missing() {
        let errors = Product::from_draft(&valid_draft(), ImagePolicy::Required).unwrap_err();
        assert!(errors.get(KEY_IMAGE).is_some());
    }
}
