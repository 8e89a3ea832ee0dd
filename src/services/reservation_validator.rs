//! Validador de reservas
//!
//! Decide si una reserva propuesta (nueva o editada) puede guardarse. La
//! decisión es pura sobre una instantánea (`check_reservation`); el
//! `ReservationValidator` solo resuelve esa instantánea a través de los
//! repositorios. Ninguno de los dos escribe en el almacenamiento.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::dto::reservation_dto::ReservationRequest;
use crate::models::guest::Guest;
use crate::models::reservation::{Reservation, ReservationDraft, ReservationStatus, ROOM_ALREADY_BOOKED};
use crate::models::room::Room;
use crate::repositories::{GuestRepository, ReservationRepository, RoomRepository};
use crate::utils::errors::{AppResult, RuleViolation};
use crate::utils::validation::{date_value, parse_positive_int};

/// Importe por persona de una reserva (no depende del número de noches)
pub const PRICE_PER_PERSON: i64 = 50;

/// `[a_start, a_end)` y `[b_start, b_end)` se solapan si comparten algún día
pub fn ranges_overlap(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start < b_end && a_end > b_start
}

/// Total de la reserva, con dos decimales como la columna NUMERIC(10,2)
pub fn reservation_total(personas: i32) -> Decimal {
    let mut total = Decimal::from(i64::from(personas) * PRICE_PER_PERSON);
    total.rescale(2);
    total
}

fn invalid(message: impl Into<String>) -> RuleViolation {
    RuleViolation::Invalid(message.into())
}

/// Evalúa la reserva propuesta contra la instantánea dada.
///
/// `room` y `guest` son el resultado de resolver los ids de la propuesta;
/// `existing` son las reservas de esa habitación. La reserva `exclude_id`
/// (la que se está editando) nunca cuenta como solapamiento.
pub fn check_reservation(
    request: &ReservationRequest,
    room: Option<&Room>,
    guest: Option<&Guest>,
    existing: &[Reservation],
    exclude_id: Option<i32>,
) -> Result<ReservationDraft, RuleViolation> {
    let room = room.ok_or_else(|| RuleViolation::NotFound("La habitación no existe".to_string()))?;
    let guest = guest.ok_or_else(|| RuleViolation::NotFound("El huésped no existe".to_string()))?;

    let (check_in, check_out) = match (
        date_value(request.check_in.as_ref()),
        date_value(request.check_out.as_ref()),
    ) {
        (Some(Ok(check_in)), Some(Ok(check_out))) => (check_in, check_out),
        (Some(_), Some(_)) => return Err(invalid("Fechas inválidas")),
        _ => return Err(invalid("Debe indicar fecha de entrada y salida")),
    };

    if check_out <= check_in {
        return Err(invalid("La fecha de salida debe ser posterior a la de entrada"));
    }

    let personas = request
        .personas
        .as_ref()
        .and_then(parse_positive_int)
        .ok_or_else(|| invalid("Debe indicar el número de personas (mínimo 1)"))?;

    if personas > room.capacity {
        return Err(invalid(format!(
            "La habitación admite máximo {} personas",
            room.capacity
        )));
    }

    let status = match request.status.as_deref() {
        None => ReservationStatus::default(),
        Some(raw) => ReservationStatus::parse(raw)
            .ok_or_else(|| invalid(format!("Estado de reserva inválido: '{}'", raw)))?,
    };

    let overlapping = existing.iter().any(|other| {
        other.room_id == room.id
            && Some(other.id) != exclude_id
            && ranges_overlap(check_in, check_out, other.check_in, other.check_out)
    });
    if overlapping {
        return Err(RuleViolation::Conflict(ROOM_ALREADY_BOOKED.to_string()));
    }

    Ok(ReservationDraft {
        room_id: room.id,
        guest_id: guest.id,
        check_in,
        check_out,
        personas,
        status,
        total: reservation_total(personas),
    })
}

/// Resuelve la instantánea de una propuesta y la evalúa con `check_reservation`
#[derive(Clone)]
pub struct ReservationValidator {
    rooms: Arc<dyn RoomRepository>,
    guests: Arc<dyn GuestRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl ReservationValidator {
    pub fn new(
        rooms: Arc<dyn RoomRepository>,
        guests: Arc<dyn GuestRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            rooms,
            guests,
            reservations,
        }
    }

    /// Valida una propuesta; en edición `exclude_id` es el id de la propia reserva
    pub async fn validate(&self, request: &ReservationRequest, exclude_id: Option<i32>) -> AppResult<ReservationDraft> {
        let room = match request.room_id.as_ref().and_then(parse_positive_int) {
            Some(id) => self.rooms.find_by_id(id).await?,
            None => None,
        };
        let guest = match request.guest_id.as_ref().and_then(parse_positive_int) {
            Some(id) => self.guests.find_by_id(id).await?,
            None => None,
        };
        let existing = match &room {
            Some(room) => self.reservations.list_by_room(room.id, exclude_id).await?,
            None => Vec::new(),
        };

        let draft = check_reservation(request, room.as_ref(), guest.as_ref(), &existing, exclude_id)?;
        log::debug!(
            "✅ Reserva válida: habitación {} del {} al {}",
            draft.room_id,
            draft.check_in,
            draft.check_out
        );
        Ok(draft)
    }
}
