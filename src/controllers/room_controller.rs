use std::sync::Arc;
use validator::Validate;

use crate::dto::common_dto::DeleteResponse;
use crate::dto::room_dto::{CreateRoomRequest, UpdateRoomRequest};
use crate::models::room::{NewRoom, Room};
use crate::repositories::{ReservationRepository, RoomRepository};
use crate::services::deletion_guard;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult, RuleViolation};

const ROOM_NOT_FOUND: &str = "No existe la habitación";
const DUPLICATE_NUMBER: &str = "Ya existe una habitación con ese número.";
const CAPACITY_BELOW_RESERVATIONS: &str =
    "La habitación tiene reservas activas con más personas que la nueva capacidad";

pub struct RoomController {
    rooms: Arc<dyn RoomRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl RoomController {
    pub fn new(state: &AppState) -> Self {
        Self {
            rooms: state.rooms.clone(),
            reservations: state.reservations.clone(),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.rooms.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Room> {
        self.rooms.find_by_id(id).await?.ok_or_else(|| not_found_error(ROOM_NOT_FOUND))
    }

    pub async fn create(&self, request: CreateRoomRequest) -> AppResult<Room> {
        request.validate()?;
        let number = request.number;

        if self.rooms.find_by_number(&number).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_NUMBER.to_string()));
        }

        let room = self
            .rooms
            .create(NewRoom {
                number,
                room_type: request.room_type,
                capacity: request.capacity,
                status: request.status.unwrap_or_default(),
            })
            .await?;

        log::info!("🏨 Habitación {} creada (id {})", room.number, room.id);
        Ok(room)
    }

    pub async fn update(&self, id: i32, request: UpdateRoomRequest) -> AppResult<Room> {
        request.validate()?;
        let mut room = self.get(id).await?;

        if let Some(number) = request.number {
            // Solo se comprueba la unicidad si el número cambia
            if number != room.number && self.rooms.find_by_number(&number).await?.is_some() {
                return Err(AppError::Conflict(DUPLICATE_NUMBER.to_string()));
            }
            room.number = number;
        }
        if let Some(room_type) = request.room_type {
            room.room_type = room_type;
        }
        if let Some(capacity) = request.capacity {
            if capacity < room.capacity {
                self.ensure_capacity_fits(id, capacity).await?;
            }
            room.capacity = capacity;
        }
        if let Some(status) = request.status {
            room.status = status;
        }

        self.rooms.update(room).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<DeleteResponse> {
        self.get(id).await?;
        deletion_guard::ensure_room_deletable(self.reservations.as_ref(), id).await?;
        self.rooms.delete(id).await?;

        log::info!("🗑️ Habitación {} eliminada", id);
        Ok(DeleteResponse::ok())
    }

    /// Las reservas vigentes de la habitación deben caber en la nueva capacidad
    async fn ensure_capacity_fits(&self, id: i32, capacity: i32) -> AppResult<()> {
        let reservations = self.reservations.list_by_room(id, None).await?;
        let exceeded = reservations
            .iter()
            .any(|r| !r.status.is_terminal() && r.personas > capacity);

        if exceeded {
            return Err(RuleViolation::Conflict(CAPACITY_BELOW_RESERVATIONS.to_string()).into());
        }
        Ok(())
    }
}
