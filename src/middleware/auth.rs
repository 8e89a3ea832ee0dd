//! Middleware de autenticación JWT
//!
//! Este módulo maneja la extracción y verificación del token Bearer y
//! deja el usuario autenticado como extensión de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token del header Authorization
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_token(token, &state.jwt_config())?;

    let user_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized("Token inválido".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}
