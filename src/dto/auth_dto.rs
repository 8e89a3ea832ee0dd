use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::User;
use crate::utils::validation::trimmed;

// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
}

// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(deserialize_with = "trimmed")]
    pub username: String,
    pub password: String,
}

// Usuario sin datos sensibles
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
}
