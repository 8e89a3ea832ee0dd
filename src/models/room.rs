//! Modelo de Room
//!
//! Habitaciones del hotel. Mapea a la tabla `rooms` y a los ENUM
//! `room_type` / `room_status` de PostgreSQL.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de habitación - mapea al ENUM room_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Individual,
    Doble,
    Suite,
    Familiar,
}

/// Estado de la habitación - mapea al ENUM room_status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "room_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Disponible,
    Ocupada,
    Mantenimiento,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Room {
    pub id: i32,
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: i32,
    pub status: RoomStatus,
}

/// Datos de una habitación aún sin id
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub number: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub status: RoomStatus,
}

impl NewRoom {
    pub fn into_room(self, id: i32) -> Room {
        Room {
            id,
            number: self.number,
            room_type: self.room_type,
            capacity: self.capacity,
            status: self.status,
        }
    }
}
