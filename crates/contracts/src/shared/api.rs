//! URL handling and the error type shared by every API call.

use super::config::DEFAULT_API_URL;
use thiserror::Error;

/// Normalize a configured base URL so that requests always go over HTTPS.
///
/// - `http://host` becomes `https://host`
/// - any other scheme is replaced by `https://`
/// - a bare host gets `https://` prepended
/// - trailing slashes are removed
/// - an empty value falls back to [`DEFAULT_API_URL`]
pub fn secure_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_API_URL.to_string();
    }

    let without_scheme = match trimmed.split_once("://") {
        Some((_, rest)) => rest,
        None => trimmed,
    };

    format!("https://{}", without_scheme.trim_end_matches('/'))
}

/// Join a base URL and an API path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Failure of a single request, rendered inline next to the control that
/// started it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Network(String),

    #[error("Error en la petición: {status} {body}")]
    Status { status: u16, body: String },

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),

    #[error("No se pudo preparar la petición: {0}")]
    Serialize(String),

    /// The owning view was torn down while the request was in flight.
    #[error("Petición cancelada")]
    Aborted,
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_is_upgraded() {
        assert_eq!(
            secure_base_url("http://api.example.com"),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_https_is_kept_and_trailing_slash_removed() {
        assert_eq!(
            secure_base_url("https://api.example.com/"),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_bare_host_gets_https() {
        assert_eq!(secure_base_url("localhost:8000"), "https://localhost:8000");
        assert_eq!(secure_base_url("  api.example.com  "), "https://api.example.com");
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(secure_base_url(""), DEFAULT_API_URL);
        assert_eq!(secure_base_url("   "), DEFAULT_API_URL);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://a.com/", "/pedidos/estado/"),
            "https://a.com/pedidos/estado/"
        );
        assert_eq!(join_url("https://a.com", "inventario/all"), "https://a.com/inventario/all");
        assert_eq!(join_url("https://a.com", ""), "https://a.com");
    }

    #[test]
    fn test_status_error_message_carries_code_and_body() {
        let err = ApiError::Status {
            status: 422,
            body: "monto inválido".to_string(),
        };
        assert_eq!(err.to_string(), "Error en la petición: 422 monto inválido");
        assert!(!err.is_aborted());
        assert!(ApiError::Aborted.is_aborted());
    }
}
