use super::{ApiError, ApiResult, CrudApi, ImageUploader};
use async_trait::async_trait;
use contracts::domain::common::{ApiEnvelope, Resource};
use contracts::shared::upload::UploadResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

const UPLOAD_PATH: &str = "/upload";

/// gloo-net client for the REST backend
#[derive(Debug, Clone, PartialEq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decodes the `{ success, data, msg }` envelope. A non-OK status still
/// carries the server's explanation when the body is an envelope.
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<ApiEnvelope<T>> {
    if !is_success(status) {
        return match serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body) {
            Ok(env) if env.msg.is_some() || env.error.is_some() => {
                Err(ApiError::Rejected(env.message()))
            }
            _ => Err(ApiError::Http { status }),
        };
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// `/upload` answer to the stored filename. Every failure is an upload error.
fn decode_upload(status: u16, body: &str) -> ApiResult<String> {
    if !is_success(status) {
        return Err(ApiError::Upload(format!("HTTP {}", status)));
    }
    serde_json::from_str::<UploadResponse>(body)
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .into_filename()
        .map_err(ApiError::Upload)
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> ApiResult<ApiEnvelope<T>> {
    let status = response.status();
    match response.text().await {
        Ok(body) => decode_envelope(status, &body),
        Err(_) if !is_success(status) => Err(ApiError::Http { status }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

async fn read_ack(response: Response) -> ApiResult<Option<String>> {
    read_envelope::<serde_json::Value>(response)
        .await?
        .into_ack()
        .map_err(ApiError::Rejected)
}

#[async_trait(?Send)]
impl<R: Resource> CrudApi<R> for HttpApi {
    async fn list(&self) -> ApiResult<Vec<R>> {
        let url = self.url(&R::collection_path());
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(network)?;
        read_envelope::<Vec<R>>(response)
            .await?
            .into_data()
            .map_err(ApiError::Rejected)
    }

    async fn create(&self, payload: &R::Create) -> ApiResult<Option<String>> {
        let url = self.url(&R::collection_path());
        log::debug!("POST {}", url);
        let request = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        read_ack(request.send().await.map_err(network)?).await
    }

    async fn update(&self, id: R::Id, payload: &R::Update) -> ApiResult<Option<String>> {
        let url = self.url(&R::item_path(&id));
        log::debug!("PUT {}", url);
        let request = Request::put(&url)
            .json(payload)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        read_ack(request.send().await.map_err(network)?).await
    }

    async fn delete(&self, id: R::Id) -> ApiResult<Option<String>> {
        let url = self.url(&R::item_path(&id));
        log::debug!("DELETE {}", url);
        let response = Request::delete(&url).send().await.map_err(network)?;
        read_ack(response).await
    }
}

#[async_trait(?Send)]
impl ImageUploader for HttpApi {
    type File = File;

    async fn upload_image(&self, file: &File) -> ApiResult<String> {
        let url = self.url(UPLOAD_PATH);
        log::debug!("POST {} ({})", url, file.name());

        let form_data = FormData::new().map_err(|e| ApiError::Upload(format!("{e:?}")))?;
        form_data
            .append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Upload(format!("{e:?}")))?;

        let request = Request::post(&url)
            .body(form_data)
            .map_err(|e| ApiError::Upload(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Upload(e.to_string()))?;
        decode_upload(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalised() {
        let api = HttpApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/categorias"), "http://localhost:8000/categorias");
    }

    #[test]
    fn test_ok_envelope_decoded() {
        let env = decode_envelope::<Vec<i64>>(200, r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(env.into_data(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_ok_status_with_garbage_is_decode_error() {
        let err = decode_envelope::<Vec<i64>>(200, "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_status_with_envelope_is_rejected() {
        let body = r#"{"success":false,"msg":"Categoría en uso"}"#;
        let err = decode_envelope::<serde_json::Value>(409, body).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Categoría en uso".into()));

        let body = r#"{"success":false,"error":"ER_DUP_ENTRY"}"#;
        let err = decode_envelope::<serde_json::Value>(500, body).unwrap_err();
        assert_eq!(err, ApiError::Rejected("ER_DUP_ENTRY".into()));
    }

    #[test]
    fn test_error_status_without_envelope_is_http() {
        let err = decode_envelope::<Vec<i64>>(502, "Bad Gateway").unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502 });
        let err = decode_envelope::<Vec<i64>>(404, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err, ApiError::Http { status: 404 });
    }

    #[test]
    fn test_upload_decoding() {
        let ok = decode_upload(200, r#"{"success":true,"file":{"filename":"17-latte.png"}}"#);
        assert_eq!(ok, Ok("17-latte.png".to_string()));
        assert_eq!(decode_upload(413, ""), Err(ApiError::Upload("HTTP 413".into())));
        assert!(matches!(decode_upload(200, "nope"), Err(ApiError::Upload(_))));
        assert!(matches!(
            decode_upload(200, r#"{"success":false,"error":"Tipo no permitido"}"#),
            Err(ApiError::Upload(_))
        ));
    }
}
