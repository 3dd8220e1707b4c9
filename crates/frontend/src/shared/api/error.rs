/// Failure of a call to the backend.
///
/// Messages are user facing; pages show them in notifications as is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never reached the server or the connection dropped.
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("El servidor respondió con el estado {status}")]
    Http { status: u16 },
    /// Server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    /// Image upload failed; the dependent save was not attempted.
    #[error("Error al subir la imagen: {0}")]
    Upload(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::Rejected("Categoría en uso".into()).to_string(), "Categoría en uso");
        assert_eq!(
            ApiError::Http { status: 500 }.to_string(),
            "El servidor respondió con el estado 500"
        );
        assert!(ApiError::Upload("HTTP 413".into())
            .to_string()
            .starts_with("Error al subir la imagen"));
    }
}
