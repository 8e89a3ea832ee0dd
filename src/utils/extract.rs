//! Extractores de la API
//!
//! Envuelven `Json`, `Path` y `Query` de axum para que sus rechazos salgan
//! con el mismo cuerpo JSON que el resto de errores (`AppError::BadRequest`).

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::AppError;

/// Cuerpo JSON de la petición
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Parámetros de la ruta (`/:id`)
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Parámetros de la query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: i32,
    }

    fn router() -> Router {
        Router::new()
            .route("/items/:id", get(|PathParam(id): PathParam<i32>| async move { id.to_string() }))
            .route(
                "/items",
                post(|JsonBody(payload): JsonBody<Payload>| async move { payload.count.to_string() }),
            )
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn malformed_path_is_a_json_bad_request() {
        let request = Request::builder().uri("/items/abc").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn wrong_body_types_are_a_json_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"count":"muchos"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["message"].as_str().is_some());
    }

    #[tokio::test]
    async fn missing_content_type_is_a_json_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::from(r#"{"count":1}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
    }
}
