//! Modelo de Guest
//!
//! Huéspedes registrados. Nombre, documento y email son únicos.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Guest {
    pub id: i32,
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct NewGuest {
    pub name: String,
    pub document: String,
    pub email: String,
    pub phone: String,
}

impl NewGuest {
    pub fn into_guest(self, id: i32) -> Guest {
        Guest {
            id,
            name: self.name,
            document: self.document,
            email: self.email,
            phone: self.phone,
        }
    }
}
