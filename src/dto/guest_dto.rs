use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{trimmed, trimmed_opt, PHONE_REGEX};

// Request para registrar un huésped
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGuestRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 50))]
    pub document: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(email)]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(regex = "PHONE_REGEX")]
    pub phone: String,
}

// Request para actualizar un huésped (campos ausentes no cambian)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateGuestRequest {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1, max = 50))]
    pub document: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(regex = "PHONE_REGEX")]
    pub phone: Option<String>,
}
