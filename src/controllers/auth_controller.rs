use bcrypt::{hash, verify};
use std::sync::Arc;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::models::user::NewUser;
use crate::repositories::UserRepository;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError, AppResult};
use crate::utils::jwt::{generate_token, JwtConfig};

const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

pub struct AuthController {
    users: Arc<dyn UserRepository>,
    jwt: JwtConfig,
    bcrypt_cost: u32,
}

impl AuthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            users: state.users.clone(),
            jwt: state.jwt_config(),
            bcrypt_cost: state.config.bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        request.validate()?;
        let username = request.username;
        let email = request.email.to_lowercase();

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(bad_request_error("Usuario ya existe"));
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(bad_request_error("El email ya está registrado"));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .users
            .create(NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        log::info!("👤 Usuario {} registrado", user.username);
        Ok(user.into())
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| bad_request_error(INVALID_CREDENTIALS))?;

        // Verificar contraseña
        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;
        if !valid {
            log::warn!("🔒 Login fallido para {}", user.username);
            return Err(bad_request_error(INVALID_CREDENTIALS));
        }

        let token = generate_token(user.id, &user.username, &self.jwt)?;
        log::info!("✅ Login correcto: {}", user.username);

        Ok(LoginResponse {
            user: user.into(),
            token,
        })
    }

    /// Usuario dueño de un token ya verificado
    pub async fn me(&self, user_id: i32) -> AppResult<UserResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::Unauthorized("El usuario del token ya no existe".to_string()))
    }
}
