use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::common_dto::DeleteResponse;
use crate::dto::reservation_dto::{ReservationRequest, ReservationResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations).post(create_reservation))
        .route(
            "/:id",
            get(get_reservation).put(update_reservation).delete(delete_reservation),
        )
}

async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_reservation(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ReservationResponse>, AppError> {
    let controller = ReservationController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn create_reservation(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), AppError> {
    let controller = ReservationController::new(&state);
    let reservation = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

async fn update_reservation(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<ReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let controller = ReservationController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_reservation(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let controller = ReservationController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
