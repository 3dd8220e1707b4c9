//! Image upload response and stored-image URL resolution.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub filename: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// Body returned by `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    pub file: Option<UploadedFile>,
    pub error: Option<String>,
}

impl UploadResponse {
    /// Server-assigned filename, the value stored in the product's `imagen`.
    pub fn into_filename(self) -> Result<String, String> {
        if !self.success {
            return Err(self
                .error
                .unwrap_or_else(|| "Error al subir la imagen".to_string()));
        }
        match self.file {
            Some(file) if !file.filename.trim().is_empty() => Ok(file.filename),
            _ => Err("El servidor no devolvió el nombre del archivo".to_string()),
        }
    }
}

fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Displayable URL for a stored image reference.
///
/// `image` may be an absolute URL, a path under the uploads prefix or a bare
/// filename. Blank values yield `None`.
pub fn resolve_image_url(api_base: &str, uploads_prefix: &str, image: Option<&str>) -> Option<String> {
    let image = image.map(str::trim).filter(|s| !s.is_empty())?;
    if image.starts_with("http://") || image.starts_with("https://") {
        return Some(image.to_string());
    }
    let prefix = format!("/{}/", uploads_prefix.trim_matches('/'));
    if image.starts_with(&prefix) {
        return Some(join(api_base, image));
    }
    Some(join(api_base, &format!("{}{}", prefix, image)))
}

/// URL shown when a stored image fails to load.
pub fn fallback_image_url(api_base: &str, uploads_prefix: &str, fallback: &str) -> String {
    join(
        api_base,
        &format!("{}/{}", uploads_prefix.trim_matches('/'), fallback),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000";

    #[test]
    fn test_into_filename() {
        let ok: UploadResponse = serde_json::from_str(
            r#"{"success":true,"file":{"filename":"1700-latte.png","path":"/uploads/1700-latte.png"}}"#,
        )
        .unwrap();
        assert_eq!(ok.into_filename().unwrap(), "1700-latte.png");

        let rejected: UploadResponse =
            serde_json::from_str(r#"{"success":false,"error":"Tipo no permitido"}"#).unwrap();
        assert_eq!(rejected.into_filename().unwrap_err(), "Tipo no permitido");

        let no_file: UploadResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(no_file.into_filename().is_err());
    }

    #[test]
    fn test_resolve_image_url() {
        assert_eq!(
            resolve_image_url(BASE, "uploads", Some("latte.png")).as_deref(),
            Some("http://localhost:8000/uploads/latte.png")
        );
        assert_eq!(
            resolve_image_url(BASE, "/uploads/", Some("/uploads/latte.png")).as_deref(),
            Some("http://localhost:8000/uploads/latte.png")
        );
        assert_eq!(
            resolve_image_url(BASE, "uploads", Some("https://cdn.test/a.png")).as_deref(),
            Some("https://cdn.test/a.png")
        );
        assert_eq!(resolve_image_url(BASE, "uploads", Some("  ")), None);
        assert_eq!(resolve_image_url(BASE, "uploads", None), None);
    }

    #[test]
    fn test_fallback_image_url() {
        assert_eq!(
            fallback_image_url("http://api.test/", "uploads", "default.png"),
            "http://api.test/uploads/default.png"
        );
    }
}
