use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::guest::Guest;
use crate::models::reservation::Reservation;
use crate::models::room::Room;

// Datos de una reserva propuesta, tal como llegan del formulario.
// Ids y personas aceptan números o strings numéricos; las fechas se guardan
// tal cual para que el validador rechace los tipos incorrectos. `total` se
// ignora porque siempre lo calcula el servidor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub room_id: Option<Value>,
    pub guest_id: Option<Value>,
    pub check_in: Option<Value>,
    pub check_out: Option<Value>,
    pub personas: Option<Value>,
    pub status: Option<String>,
}

impl ReservationRequest {
    /// Completa los campos ausentes con los de la reserva guardada
    pub fn merged_with(self, current: &Reservation) -> Self {
        Self {
            room_id: self.room_id.or_else(|| Some(Value::from(current.room_id))),
            guest_id: self.guest_id.or_else(|| Some(Value::from(current.guest_id))),
            check_in: self.check_in.or_else(|| Some(Value::from(current.check_in.to_string()))),
            check_out: self.check_out.or_else(|| Some(Value::from(current.check_out.to_string()))),
            personas: self.personas.or_else(|| Some(Value::from(current.personas))),
            status: self.status.or_else(|| {
                serde_json::to_value(current.status)
                    .ok()
                    .and_then(|v| v.as_str().map(str::to_string))
            }),
        }
    }
}

// Reserva con su habitación y huésped embebidos
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub room: Option<Room>,
    pub guest: Option<Guest>,
}
