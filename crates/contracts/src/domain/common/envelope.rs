use serde::{Deserialize, Serialize};

const UNKNOWN_ERROR: &str = "Error desconocido";

/// Response body shared by every JSON endpoint of the backend:
/// `{ success, data?, msg?, error? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub msg: Option<String>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Server-provided explanation, falling back to a generic message.
    pub fn message(&self) -> String {
        self.msg
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(UNKNOWN_ERROR)
            .to_string()
    }

    /// Payload of a successful list/read call.
    pub fn into_data(self) -> Result<T, String> {
        if !self.success {
            return Err(self.message());
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err("Respuesta sin datos".to_string()),
        }
    }

    /// Acknowledgement of a write call; yields the optional server message.
    pub fn into_ack(self) -> Result<Option<String>, String> {
        if self.success {
            Ok(self.msg)
        } else {
            Err(self.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope() {
        let env: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert_eq!(env.into_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_carries_server_message() {
        let env: ApiEnvelope<Vec<i64>> =
            serde_json::from_str(r#"{"success":false,"msg":"Categoría en uso"}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err(), "Categoría en uso");

        let env: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success":false,"error":"boom"}"#).unwrap();
        assert_eq!(env.into_ack().unwrap_err(), "boom");

        let env: ApiEnvelope<()> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(env.into_ack().unwrap_err(), UNKNOWN_ERROR);
    }

    #[test]
    fn test_ack_without_message() {
        let env: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(env.into_ack().unwrap(), None);
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let env: ApiEnvelope<Vec<i64>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(env.into_data().is_err());
    }
}
