use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::guest_controller::GuestController;
use crate::dto::common_dto::DeleteResponse;
use crate::dto::guest_dto::{CreateGuestRequest, UpdateGuestRequest};
use crate::models::guest::Guest;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_guest_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_guests).post(create_guest))
        .route("/:id", get(get_guest).put(update_guest).delete(delete_guest))
}

async fn list_guests(State(state): State<AppState>) -> Result<Json<Vec<Guest>>, AppError> {
    let controller = GuestController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_guest(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Guest>, AppError> {
    let controller = GuestController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn create_guest(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateGuestRequest>,
) -> Result<(StatusCode, Json<Guest>), AppError> {
    let controller = GuestController::new(&state);
    let guest = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

async fn update_guest(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateGuestRequest>,
) -> Result<Json<Guest>, AppError> {
    let controller = GuestController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_guest(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let controller = GuestController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
