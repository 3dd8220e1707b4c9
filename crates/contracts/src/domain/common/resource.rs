use super::AggregateId;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;

/// A record kind managed through `/{collection}` and `/{collection}/{id}`.
pub trait Resource: Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    type Id: AggregateId + Display + Send + Sync + 'static;
    /// POST body.
    type Create: Serialize + Clone + 'static;
    /// PUT body; derived from the validated create payload.
    type Update: Serialize + From<Self::Create>;

    /// Path segment of the collection endpoint, e.g. `categorias`.
    const COLLECTION: &'static str;
    /// Singular UI name used in notifications.
    const ELEMENT_NAME: &'static str;

    fn id(&self) -> Self::Id;

    fn collection_path() -> String {
        format!("/{}", Self::COLLECTION)
    }

    fn item_path(id: &Self::Id) -> String {
        format!("/{}/{}", Self::COLLECTION, id.as_string())
    }
}
