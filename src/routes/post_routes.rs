use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::post_controller::PostController;
use crate::dto::post_dto::{FeedQuery, OriginQuery, PatchPostRequest, PostRequest, SearchQuery};
use crate::models::post::PostView;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam, QueryParams};

pub fn create_post_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/feed", get(feed))
        .route("/search", get(search))
        .route("/external/:id", get(get_external_post))
        .route("/:id", get(get_post).put(replace_post).patch(patch_post).delete(delete_post))
}

async fn list_posts(State(state): State<AppState>) -> Result<Json<Vec<PostView>>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn feed(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<FeedQuery>,
) -> Result<Json<Vec<PostView>>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.feed(query).await?))
}

async fn search(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SearchQuery>,
) -> Result<Json<Vec<PostView>>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.search(query).await?))
}

async fn get_external_post(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<PostView>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.get_external(id).await?))
}

async fn get_post(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<OriginQuery>,
) -> Result<Json<PostView>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.get(id, query.origin.unwrap_or_default()).await?))
}

async fn create_post(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<PostRequest>,
) -> Result<(StatusCode, Json<PostView>), AppError> {
    let controller = PostController::new(&state);
    let post = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn replace_post(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<OriginQuery>,
    JsonBody(request): JsonBody<PostRequest>,
) -> Result<Json<PostView>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.replace(id, query.origin, request).await?))
}

async fn patch_post(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<OriginQuery>,
    JsonBody(request): JsonBody<PatchPostRequest>,
) -> Result<Json<PostView>, AppError> {
    let controller = PostController::new(&state);
    Ok(Json(controller.patch(id, query.origin.unwrap_or_default(), request).await?))
}

async fn delete_post(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(query): QueryParams<OriginQuery>,
) -> Result<StatusCode, AppError> {
    let controller = PostController::new(&state);
    controller.delete(id, query.origin.unwrap_or_default()).await?;
    Ok(StatusCode::NO_CONTENT)
}
