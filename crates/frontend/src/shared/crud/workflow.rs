use crate::shared::api::{ApiError, ApiResult, CrudApi, ImageUploader};
use contracts::domain::a002_product::{Product, ProductId, ProductPayload};
use contracts::domain::common::Resource;

/// Which endpoint a validated payload goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget<Id> {
    Create,
    Update(Id),
}

fn logged<R: Resource>(action: &'static str) -> impl Fn(ApiError) -> ApiError {
    move |e| {
        log::error!("{} {} failed: {}", action, R::ELEMENT_NAME, e);
        e
    }
}

/// Full list, one GET.
pub async fn refresh<R, A>(api: &A) -> ApiResult<Vec<R>>
where
    R: Resource,
    A: CrudApi<R> + ?Sized,
{
    let rows = api.list().await.map_err(logged::<R>("fetch"))?;
    log::debug!("Fetched {} rows from /{}", rows.len(), R::COLLECTION);
    Ok(rows)
}

/// One POST, then one GET when the server acknowledged.
pub async fn create_then_refresh<R, A>(api: &A, payload: &R::Create) -> ApiResult<Vec<R>>
where
    R: Resource,
    A: CrudApi<R> + ?Sized,
{
    let msg = api.create(payload).await.map_err(logged::<R>("create"))?;
    log::info!("{} created{}", R::ELEMENT_NAME, suffix(msg));
    refresh(api).await
}

/// One PUT, then one GET when the server acknowledged.
pub async fn update_then_refresh<R, A>(api: &A, id: R::Id, payload: &R::Update) -> ApiResult<Vec<R>>
where
    R: Resource,
    A: CrudApi<R> + ?Sized,
{
    let msg = api.update(id, payload).await.map_err(logged::<R>("update"))?;
    log::info!("{} {} updated{}", R::ELEMENT_NAME, id, suffix(msg));
    refresh(api).await
}

/// Asks `confirm` first. A declined confirmation makes no call and yields
/// `Ok(None)`; otherwise one DELETE then one GET.
pub async fn delete_then_refresh<R, A>(
    api: &A,
    id: R::Id,
    confirm: impl FnOnce() -> bool,
) -> ApiResult<Option<Vec<R>>>
where
    R: Resource,
    A: CrudApi<R> + ?Sized,
{
    if !confirm() {
        log::debug!("Delete of {} {} cancelled", R::ELEMENT_NAME, id);
        return Ok(None);
    }
    let msg = api.delete(id).await.map_err(logged::<R>("delete"))?;
    log::info!("{} {} deleted{}", R::ELEMENT_NAME, id, suffix(msg));
    refresh(api).await.map(Some)
}

/// Create or update from the same validated payload.
pub async fn save_resource<R, A>(api: &A, target: SaveTarget<R::Id>, payload: R::Create) -> ApiResult<Vec<R>>
where
    R: Resource,
    A: CrudApi<R> + ?Sized,
{
    match target {
        SaveTarget::Create => create_then_refresh(api, &payload).await,
        SaveTarget::Update(id) => update_then_refresh(api, id, &R::Update::from(payload)).await,
    }
}

/// Upload-then-persist. A pending file is uploaded first and its stored
/// filename replaces `payload.image`; a failed upload aborts the save.
pub async fn save_product<A>(
    api: &A,
    target: SaveTarget<ProductId>,
    mut payload: ProductPayload,
    pending_file: Option<&A::File>,
) -> ApiResult<Vec<Product>>
where
    A: CrudApi<Product> + ImageUploader + ?Sized,
{
    if let Some(file) = pending_file {
        let filename = api.upload_image(file).await.map_err(|e| {
            let e = match e {
                ApiError::Upload(_) => e,
                other => ApiError::Upload(other.to_string()),
            };
            log::error!("Image upload failed: {}", e);
            e
        })?;
        log::info!("Image stored as {}", filename);
        payload.image = Some(filename);
    }
    save_resource::<Product, A>(api, target, payload).await
}

fn suffix(msg: Option<String>) -> String {
    msg.map(|m| format!(": {}", m)).unwrap_or_default()
}
