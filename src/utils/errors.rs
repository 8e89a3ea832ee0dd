//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Rechazo de una regla de negocio (validador de reservas, guardas de borrado)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    /// Una entidad referenciada no existe
    #[error("{0}")]
    NotFound(String),

    /// Datos mal formados o fuera de rango
    #[error("{0}")]
    Invalid(String),

    /// Solapamiento, dependencias o estado que impide la operación
    #[error("{0}")]
    Conflict(String),
}

impl RuleViolation {
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::NotFound(_) => "NOT_FOUND",
            RuleViolation::Invalid(_) => "VALIDATION_ERROR",
            RuleViolation::Conflict(_) => "CONFLICT",
        }
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Rule violation: {0}")]
    Rule(#[from] RuleViolation),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl ErrorResponse {
    fn new(error: &str, message: String, code: &str) -> Self {
        Self {
            error: error.to_string(),
            message,
            details: None,
            code: Some(code.to_string()),
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(msg) => {
                error!("❌ Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Database Error",
                        "An error occurred while accessing the database".to_string(),
                        "DB_ERROR",
                    ),
                )
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(
                        "Validation Error",
                        "The provided data is invalid".to_string(),
                        "VALIDATION_ERROR",
                    )
                    .with_details(json!(e)),
                )
            }

            // Los rechazos del validador y de las guardas se devuelven como 400
            AppError::Rule(violation) => {
                warn!("⚠️ Regla de negocio rechazada: {}", violation);
                let code = violation.code();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", violation.to_string(), code),
                )
            }

            AppError::Unauthorized(msg) => {
                warn!("🔒 Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("Unauthorized", msg, "UNAUTHORIZED"),
                )
            }

            AppError::NotFound(msg) => {
                warn!("🔍 Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
                )
            }

            AppError::Conflict(msg) => {
                warn!("⚠️ Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse::new("Conflict", msg, "CONFLICT"),
                )
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", msg, "BAD_REQUEST"),
                )
            }

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "An unexpected error occurred".to_string(),
                        "INTERNAL_ERROR",
                    ),
                )
            }

            AppError::Jwt(msg) => {
                warn!("🔒 JWT error: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse::new("JWT Error", msg, "JWT_ERROR"),
                )
            }

            AppError::Hash(msg) => {
                error!("❌ Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Hash Error",
                        "An error occurred while processing credentials".to_string(),
                        "HASH_ERROR",
                    ),
                )
            }

            AppError::ExternalApi(msg) => {
                error!("❌ External API error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::new(
                        "External API Error",
                        "An error occurred while communicating with external service".to_string(),
                        "EXTERNAL_API_ERROR",
                    )
                    .with_details(json!({ "external_api_error": msg })),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Rechazos de los extractores de axum (ver `utils::extract`)
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Convierte un error de sqlx en `AppError`.
///
/// Las violaciones de unicidad y de clave foránea se reportan como conflicto;
/// el resto queda como error de base de datos con el contexto dado.
pub fn database_error(context: &str, e: sqlx::Error) -> AppError {
    if let Some(db_error) = e.as_database_error() {
        match db_error.code().as_deref() {
            Some("23505") => {
                return AppError::Conflict(format!("{}: el valor ya existe", context));
            }
            Some("23503") => {
                return AppError::Conflict(format!("{}: el registro tiene referencias", context));
            }
            _ => {}
        }
    }
    AppError::Database(format!("{}: {}", context, e))
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
