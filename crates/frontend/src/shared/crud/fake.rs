//! In-memory backend recording every call, for workflow tests.

use crate::shared::api::{ApiError, ApiResult, CrudApi, ImageUploader};
use async_trait::async_trait;
use contracts::domain::a001_category::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use contracts::domain::a002_product::{Product, ProductId, ProductPayload};
use std::cell::RefCell;

#[derive(Default)]
pub struct FakeBackend {
    pub(crate) categories: RefCell<Vec<Category>>,
    pub(crate) products: RefCell<Vec<Product>>,
    pub(crate) calls: RefCell<Vec<String>>,
    pub(crate) product_payloads: RefCell<Vec<ProductPayload>>,
    pub fail_upload: bool,
    pub reject_writes: Option<String>,
}

fn product_from(id: i64, p: &ProductPayload) -> Product {
    Product {
        id: ProductId(id),
        category_id: p.category_id,
        category_label: None,
        name: p.name.clone(),
        description: p.description.clone(),
        price: p.price,
        cost: p.cost,
        stock: p.stock,
        image: p.image.clone(),
        status: p.status,
        created_at: p.created_at.clone(),
    }
}

impl FakeBackend {
    pub fn with_products(payloads: Vec<ProductPayload>) -> Self {
        let backend = Self::default();
        *backend.products.borrow_mut() = payloads
            .iter()
            .enumerate()
            .map(|(i, p)| product_from(i as i64 + 1, p))
            .collect();
        backend
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn last_product_payload(&self) -> Option<ProductPayload> {
        self.product_payloads.borrow().last().cloned()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn ack(&self) -> ApiResult<Option<String>> {
        match &self.reject_writes {
            Some(msg) => Err(ApiError::Rejected(msg.clone())),
            None => Ok(None),
        }
    }
}

#[async_trait(?Send)]
impl CrudApi<Category> for FakeBackend {
    async fn list(&self) -> ApiResult<Vec<Category>> {
        self.record("GET /categorias".into());
        Ok(self.categories.borrow().clone())
    }

    async fn create(&self, payload: &CategoryCreate) -> ApiResult<Option<String>> {
        self.record("POST /categorias".into());
        self.ack()?;
        let mut rows = self.categories.borrow_mut();
        let id = rows.len() as i64 + 1;
        rows.push(Category {
            id: CategoryId(id),
            product_type: payload.product_type.clone(),
            description: payload.description.clone(),
            status: payload.status,
            created_at: payload.created_at.clone(),
        });
        Ok(Some("Categoría creada".into()))
    }

    async fn update(&self, id: CategoryId, payload: &CategoryUpdate) -> ApiResult<Option<String>> {
        self.record(format!("PUT /categorias/{}", id));
        self.ack()?;
        if let Some(row) = self.categories.borrow_mut().iter_mut().find(|c| c.id == id) {
            row.product_type = payload.product_type.clone();
            row.description = payload.description.clone();
            row.status = payload.status;
        }
        Ok(None)
    }

    async fn delete(&self, id: CategoryId) -> ApiResult<Option<String>> {
        self.record(format!("DELETE /categorias/{}", id));
        self.ack()?;
        self.categories.borrow_mut().retain(|c| c.id != id);
        Ok(None)
    }
}

#[async_trait(?Send)]
impl CrudApi<Product> for FakeBackend {
    async fn list(&self) -> ApiResult<Vec<Product>> {
        self.record("GET /productos".into());
        Ok(self.products.borrow().clone())
    }

    async fn create(&self, payload: &ProductPayload) -> ApiResult<Option<String>> {
        self.record("POST /productos".into());
        self.ack()?;
        self.product_payloads.borrow_mut().push(payload.clone());
        let mut rows = self.products.borrow_mut();
        let id = rows.len() as i64 + 1;
        rows.push(product_from(id, payload));
        Ok(None)
    }

    async fn update(&self, id: ProductId, payload: &ProductPayload) -> ApiResult<Option<String>> {
        self.record(format!("PUT /productos/{}", id));
        self.ack()?;
        self.product_payloads.borrow_mut().push(payload.clone());
        if let Some(row) = self.products.borrow_mut().iter_mut().find(|p| p.id == id) {
            *row = product_from(id.value(), payload);
        }
        Ok(None)
    }

    async fn delete(&self, id: ProductId) -> ApiResult<Option<String>> {
        self.record(format!("DELETE /productos/{}", id));
        self.ack()?;
        self.products.borrow_mut().retain(|p| p.id != id);
        Ok(None)
    }
}

#[async_trait(?Send)]
impl ImageUploader for FakeBackend {
    /// Stands in for a browser `File`: just its name.
    type File = String;

    async fn upload_image(&self, file: &String) -> ApiResult<String> {
        self.record(format!("UPLOAD {}", file));
        if self.fail_upload {
            return Err(ApiError::Upload("HTTP 500".into()));
        }
        Ok(format!("1700000000-{}", file))
    }
}
