//! Backend access.
//!
//! Pages and workflows talk to the backend only through [`CrudApi`] and
//! [`ImageUploader`]; [`HttpApi`] is the browser implementation.

mod client;
mod error;

pub use client::HttpApi;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;
use contracts::domain::common::Resource;

/// CRUD endpoints of one resource collection.
///
/// Write calls yield the optional server message of the acknowledgement.
#[async_trait(?Send)]
pub trait CrudApi<R: Resource> {
    async fn list(&self) -> ApiResult<Vec<R>>;

    async fn create(&self, payload: &R::Create) -> ApiResult<Option<String>>;

    async fn update(&self, id: R::Id, payload: &R::Update) -> ApiResult<Option<String>>;

    async fn delete(&self, id: R::Id) -> ApiResult<Option<String>>;
}

/// Multipart image upload; yields the server-assigned filename.
#[async_trait(?Send)]
pub trait ImageUploader {
    type File;

    async fn upload_image(&self, file: &Self::File) -> ApiResult<String>;
}

pub fn use_api() -> HttpApi {
    leptos::prelude::use_context::<HttpApi>().expect("HttpApi not provided in context")
}
