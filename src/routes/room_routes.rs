use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::room_controller::RoomController;
use crate::dto::common_dto::DeleteResponse;
use crate::dto::room_dto::{CreateRoomRequest, UpdateRoomRequest};
use crate::models::room::Room;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_room_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route("/:id", get(get_room).put(update_room).delete(delete_room))
}

async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    let controller = RoomController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_room(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<Room>, AppError> {
    let controller = RoomController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn create_room(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    let controller = RoomController::new(&state);
    let room = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn update_room(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateRoomRequest>,
) -> Result<Json<Room>, AppError> {
    let controller = RoomController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_room(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let controller = RoomController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
