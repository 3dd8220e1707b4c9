use crate::domain::common::lenient::string_or_empty;
use crate::domain::common::{Resource, Status};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id! {
    /// Server-assigned category id (`id_categoria`)
    CategoryId
}

// ============================================================================
// Aggregate
// ============================================================================

/// Product category as listed by `GET /categorias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "id_categoria")]
    pub id: CategoryId,

    #[serde(rename = "tipoProducto", default, deserialize_with = "string_or_empty")]
    pub product_type: String,

    #[serde(rename = "tipoDescripcion", default, deserialize_with = "string_or_empty")]
    pub description: String,

    #[serde(rename = "estado", default)]
    pub status: Status,

    #[serde(rename = "fecha_creacion", default, deserialize_with = "string_or_empty")]
    pub created_at: String,
}

impl Resource for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;

    const COLLECTION: &'static str = "categorias";
    const ELEMENT_NAME: &'static str = "Categoría";

    fn id(&self) -> CategoryId {
        self.id
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// `POST /categorias` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreate {
    #[serde(rename = "tipoProducto")]
    pub product_type: String,
    #[serde(rename = "tipoDescripcion")]
    pub description: String,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "fecha_creacion")]
    pub created_at: String,
}

/// `PUT /categorias/{id}` body. The update endpoint reads shortened names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    #[serde(rename = "tipoProd")]
    pub product_type: String,
    #[serde(rename = "tipoDescrip")]
    pub description: String,
    #[serde(rename = "estado")]
    pub status: Status,
    #[serde(rename = "fecha")]
    pub created_at: String,
}

impl From<CategoryCreate> for CategoryUpdate {
    fn from(c: CategoryCreate) -> Self {
        Self {
            product_type: c.product_type,
            description: c.description,
            status: c.status,
            created_at: c.created_at,
        }
    }
}
