use crate::domain::a001_category::{Category, CategoryId};
use crate::domain::common::lenient::{blank_as_none, f64_from_any, i64_from_any, string_or_empty};
use crate::domain::common::{Resource, Status};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id! {
    /// Server-assigned product id (`id_producto`)
    ProductId
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product row as listed by `GET /productos`.
///
/// Decimal columns arrive either as numbers or as strings, so the numeric
/// fields go through the lenient deserializers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "id_producto")]
    pub id: ProductId,

    #[serde(rename = "id_categoria", default)]
    pub category_id: CategoryId,

    /// Category name joined in by the backend
    #[serde(rename = "tipoProducto", default, deserialize_with = "blank_as_none")]
    pub category_label: Option<String>,

    #[serde(rename = "nombre", default, deserialize_with = "string_or_empty")]
    pub name: String,

    #[serde(rename = "descripcion", default, deserialize_with = "string_or_empty")]
    pub description: String,

    #[serde(rename = "precio", default, deserialize_with = "f64_from_any")]
    pub price: f64,

    #[serde(rename = "costo", default, deserialize_with = "f64_from_any")]
    pub cost: f64,

    #[serde(default, deserialize_with = "i64_from_any")]
    pub stock: i64,

    #[serde(rename = "imagen", default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,

    #[serde(rename = "estado", default)]
    pub status: Status,

    #[serde(rename = "fecha_creacion", default, deserialize_with = "string_or_empty")]
    pub created_at: String,
}

impl Product {
    pub fn category_display(&self) -> String {
        self.category_label
            .clone()
            .unwrap_or_else(|| self.category_id.to_string())
    }

    /// Fills a missing category label from an already loaded category list.
    pub fn with_category_label(mut self, categories: &[Category]) -> Self {
        if self.category_label.is_none() {
            self.category_label = categories
                .iter()
                .find(|c| c.id == self.category_id)
                .map(|c| c.product_type.clone());
        }
        self
    }
}

impl Resource for Product {
    type Id = ProductId;
    type Create = ProductPayload;
    type Update = ProductPayload;

    const COLLECTION: &'static str = "productos";
    const ELEMENT_NAME: &'static str = "Producto";

    fn id(&self) -> ProductId {
        self.id
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Body of both `POST /productos` and `PUT /productos/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "costo")]
    pub cost: f64,
    pub stock: i64,
    /// Stored filename; `null` when the product has no image.
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "id_categoria")]
    pub category_id: CategoryId,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "fecha_creacion")]
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_decimal_strings() {
        let raw = json!({
            "id_producto": 12,
            "id_categoria": 2,
            "tipoProducto": "Bebidas",
            "nombre": "Latte Caramelo",
            "descripcion": null,
            "precio": "4.25",
            "costo": 1.5,
            "stock": "30",
            "imagen": "",
            "estado": 1,
            "fecha_creacion": "2024-05-01T10:00:00.000Z"
        });
        let p: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(p.price, 4.25);
        assert_eq!(p.cost, 1.5);
        assert_eq!(p.stock, 30);
        assert_eq!(p.image, None);
        assert_eq!(p.description, "");
        assert_eq!(p.category_display(), "Bebidas");
    }

    #[test]
    fn test_category_display_falls_back_to_id() {
        let p: Product = serde_json::from_value(json!({
            "id_producto": 1, "id_categoria": 5, "nombre": "Muffin", "precio": 2
        }))
        .unwrap();
        assert_eq!(p.category_display(), "5");
        assert_eq!(p.status, Status::Active);
    }

    #[test]
    fn test_category_label_from_loaded_list() {
        let categories = vec![Category {
            id: CategoryId(5),
            product_type: "Panadería".into(),
            description: String::new(),
            status: Status::Active,
            created_at: String::new(),
        }];
        let p: Product = serde_json::from_value(json!({
            "id_producto": 1, "id_categoria": 5, "nombre": "Muffin", "precio": 2
        }))
        .unwrap();
        assert_eq!(p.clone().with_category_label(&categories).category_display(), "Panadería");
        assert_eq!(p.with_category_label(&[]).category_display(), "5");

        let labelled: Product = serde_json::from_value(json!({
            "id_producto": 2, "id_categoria": 5, "tipoProducto": "Postres", "nombre": "Pay", "precio": 3
        }))
        .unwrap();
        assert_eq!(labelled.with_category_label(&categories).category_display(), "Postres");
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = ProductPayload {
            name: "Latte".into(),
            description: String::new(),
            price: 4.25,
            cost: 0.0,
            stock: 3,
            image: None,
            category_id: CategoryId(2),
            status: Status::Active,
            created_at: "2024-05-01T10:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["imagen"], serde_json::Value::Null);
        assert_eq!(value["id_categoria"], json!(2));
        assert_eq!(value["precio"], json!(4.25));
        assert_eq!(value["estado"], json!(1));
    }
}
