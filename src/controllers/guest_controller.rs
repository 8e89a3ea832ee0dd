use std::sync::Arc;
use validator::Validate;

use crate::dto::common_dto::DeleteResponse;
use crate::dto::guest_dto::{CreateGuestRequest, UpdateGuestRequest};
use crate::models::guest::{Guest, NewGuest};
use crate::repositories::{GuestRepository, ReservationRepository};
use crate::services::deletion_guard;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError, AppResult};

const GUEST_NOT_FOUND: &str = "No existe el huésped";

pub struct GuestController {
    guests: Arc<dyn GuestRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl GuestController {
    pub fn new(state: &AppState) -> Self {
        Self {
            guests: state.guests.clone(),
            reservations: state.reservations.clone(),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Guest>> {
        self.guests.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Guest> {
        self.guests.find_by_id(id).await?.ok_or_else(|| not_found_error(GUEST_NOT_FOUND))
    }

    pub async fn create(&self, request: CreateGuestRequest) -> AppResult<Guest> {
        request.validate()?;
        let guest = NewGuest {
            name: request.name,
            document: request.document,
            email: request.email.to_lowercase(),
            phone: request.phone,
        };

        self.ensure_unique_name(&guest.name, None).await?;
        self.ensure_unique_document(&guest.document, None).await?;
        self.ensure_unique_email(&guest.email, None).await?;

        let guest = self.guests.create(guest).await?;
        log::info!("🧳 Huésped {} registrado (id {})", guest.name, guest.id);
        Ok(guest)
    }

    pub async fn update(&self, id: i32, request: UpdateGuestRequest) -> AppResult<Guest> {
        request.validate()?;
        let mut guest = self.get(id).await?;

        if let Some(name) = request.name {
            self.ensure_unique_name(&name, Some(id)).await?;
            guest.name = name;
        }
        if let Some(document) = request.document {
            self.ensure_unique_document(&document, Some(id)).await?;
            guest.document = document;
        }
        if let Some(email) = request.email {
            let email = email.to_lowercase();
            self.ensure_unique_email(&email, Some(id)).await?;
            guest.email = email;
        }
        if let Some(phone) = request.phone {
            guest.phone = phone;
        }

        self.guests.update(guest).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<DeleteResponse> {
        self.get(id).await?;
        deletion_guard::ensure_guest_deletable(self.reservations.as_ref(), id).await?;
        self.guests.delete(id).await?;

        log::info!("🗑️ Huésped {} eliminado", id);
        Ok(DeleteResponse::ok())
    }

    async fn ensure_unique_name(&self, name: &str, current_id: Option<i32>) -> AppResult<()> {
        match self.guests.find_by_name(name).await? {
            Some(other) if Some(other.id) != current_id => Err(AppError::Conflict(
                "Ya existe un huésped con ese nombre.".to_string(),
            )),
            _ => Ok(()),
        }
    }

    async fn ensure_unique_document(&self, document: &str, current_id: Option<i32>) -> AppResult<()> {
        match self.guests.find_by_document(document).await? {
            Some(other) if Some(other.id) != current_id => Err(AppError::Conflict(
                "Ya existe un huésped con ese documento.".to_string(),
            )),
            _ => Ok(()),
        }
    }

    async fn ensure_unique_email(&self, email: &str, current_id: Option<i32>) -> AppResult<()> {
        match self.guests.find_by_email(email).await? {
            Some(other) if Some(other.id) != current_id => Err(AppError::Conflict(
                "Ya existe un huésped con ese email.".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
