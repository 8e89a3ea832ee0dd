use serde::Deserialize;
use validator::Validate;

use crate::models::room::{RoomStatus, RoomType};
use crate::utils::validation::{trimmed, trimmed_opt};

// Request para crear una habitación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 20))]
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[validate(range(min = 1))]
    pub capacity: i32,
    pub status: Option<RoomStatus>,
}

// Request para actualizar una habitación (campos ausentes no cambian)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1, max = 20))]
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    pub status: Option<RoomStatus>,
}
