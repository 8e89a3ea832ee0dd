//! Modelo de Reservation
//!
//! Reservas de habitaciones. El rango `[check_in, check_out)` es semiabierto:
//! el día de salida queda libre para la siguiente reserva.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Mensaje de solapamiento, compartido por el validador y la restricción de exclusión
pub const ROOM_ALREADY_BOOKED: &str = "La habitación ya está reservada en ese rango de fechas";

/// Estado de la reserva - mapea al ENUM reservation_status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pendiente,
    Confirmada,
    Cancelada,
    Finalizada,
}

impl ReservationStatus {
    /// Estados tras los cuales la reserva ya no bloquea la habitación
    pub fn is_terminal(self) -> bool {
        matches!(self, ReservationStatus::Cancelada | ReservationStatus::Finalizada)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pendiente" => Some(Self::Pendiente),
            "confirmada" => Some(Self::Confirmada),
            "cancelada" => Some(Self::Cancelada),
            "finalizada" => Some(Self::Finalizada),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub personas: i32,
    pub status: ReservationStatus,
    pub total: Decimal,
}

/// Reserva validada lista para persistir (alta o edición)
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationDraft {
    pub room_id: i32,
    pub guest_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub personas: i32,
    pub status: ReservationStatus,
    pub total: Decimal,
}

impl ReservationDraft {
    pub fn into_reservation(self, id: i32) -> Reservation {
        Reservation {
            id,
            room_id: self.room_id,
            guest_id: self.guest_id,
            check_in: self.check_in,
            check_out: self.check_out,
            personas: self.personas,
            status: self.status,
            total: self.total,
        }
    }
}
