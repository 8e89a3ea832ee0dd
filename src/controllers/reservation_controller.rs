use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::dto::common_dto::DeleteResponse;
use crate::dto::reservation_dto::{ReservationRequest, ReservationResponse};
use crate::models::reservation::Reservation;
use crate::repositories::{GuestRepository, ReservationRepository, RoomRepository};
use crate::services::deletion_guard;
use crate::services::reservation_validator::ReservationValidator;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppResult};

const RESERVATION_NOT_FOUND: &str = "No existe la reserva";

pub struct ReservationController {
    rooms: Arc<dyn RoomRepository>,
    guests: Arc<dyn GuestRepository>,
    reservations: Arc<dyn ReservationRepository>,
    validator: ReservationValidator,
    gate: Arc<Mutex<()>>,
}

impl ReservationController {
    pub fn new(state: &AppState) -> Self {
        Self {
            rooms: state.rooms.clone(),
            guests: state.guests.clone(),
            reservations: state.reservations.clone(),
            validator: state.reservation_validator(),
            gate: state.reservation_gate.clone(),
        }
    }

    /// Todas las reservas con su habitación y huésped
    pub async fn list(&self) -> AppResult<Vec<ReservationResponse>> {
        let reservations = self.reservations.list().await?;
        let rooms: HashMap<_, _> = self.rooms.list().await?.into_iter().map(|r| (r.id, r)).collect();
        let guests: HashMap<_, _> = self.guests.list().await?.into_iter().map(|g| (g.id, g)).collect();

        Ok(reservations
            .into_iter()
            .map(|reservation| ReservationResponse {
                room: rooms.get(&reservation.room_id).cloned(),
                guest: guests.get(&reservation.guest_id).cloned(),
                reservation,
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> AppResult<ReservationResponse> {
        let reservation = self.find(id).await?;
        self.with_references(reservation).await
    }

    pub async fn create(&self, request: ReservationRequest) -> AppResult<ReservationResponse> {
        let reservation = {
            let _gate = self.gate.lock().await;
            let draft = self.validator.validate(&request, None).await?;
            self.reservations.create(draft).await?
        };

        log::info!(
            "📅 Reserva {} creada: habitación {} del {} al {}",
            reservation.id,
            reservation.room_id,
            reservation.check_in,
            reservation.check_out
        );
        self.with_references(reservation).await
    }

    /// Edición: los campos ausentes se toman de la reserva guardada
    pub async fn update(&self, id: i32, request: ReservationRequest) -> AppResult<ReservationResponse> {
        let reservation = {
            let _gate = self.gate.lock().await;
            let current = self.find(id).await?;
            let request = request.merged_with(&current);
            let draft = self.validator.validate(&request, Some(id)).await?;
            self.reservations.update(id, draft).await?
        };

        log::info!("✏️ Reserva {} actualizada", id);
        self.with_references(reservation).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<DeleteResponse> {
        let reservation = self.find(id).await?;
        deletion_guard::ensure_reservation_deletable(&reservation)?;
        self.reservations.delete(id).await?;

        log::info!("🗑️ Reserva {} eliminada", id);
        Ok(DeleteResponse::ok())
    }

    async fn find(&self, id: i32) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(RESERVATION_NOT_FOUND))
    }

    async fn with_references(&self, reservation: Reservation) -> AppResult<ReservationResponse> {
        let room = self.rooms.find_by_id(reservation.room_id).await?;
        let guest = self.guests.find_by_id(reservation.guest_id).await?;
        Ok(ReservationResponse {
            reservation,
            room,
            guest,
        })
    }
}
