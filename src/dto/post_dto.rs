use serde::Deserialize;
use validator::Validate;

use crate::models::post::{NewPost, PostChanges, PostOrigin};
use crate::utils::validation::{trimmed, trimmed_opt};

// Request para crear o reemplazar un post
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1))]
    pub body: String,
    pub user_id: i32,
    #[serde(default)]
    pub origin: Option<PostOrigin>,
}

impl PostRequest {
    /// Origen efectivo: el indicado por query prevalece sobre el del cuerpo
    pub fn into_new_post(self, query_origin: Option<PostOrigin>) -> (PostOrigin, NewPost) {
        (
            query_origin.or(self.origin).unwrap_or_default(),
            NewPost {
                title: self.title,
                body: self.body,
                user_id: self.user_id,
            },
        )
    }
}

// Request para modificar parcialmente un post
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatchPostRequest {
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[validate(length(min = 1))]
    pub body: Option<String>,
    pub user_id: Option<i32>,
}

impl From<PatchPostRequest> for PostChanges {
    fn from(request: PatchPostRequest) -> Self {
        Self {
            title: request.title,
            body: request.body,
            user_id: request.user_id,
        }
    }
}

// Query `?origin=local|external`
#[derive(Debug, Default, Deserialize)]
pub struct OriginQuery {
    pub origin: Option<PostOrigin>,
}

// Query del feed combinado
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    pub user_id: Option<i32>,
    pub limit: Option<u32>,
}

// Query de búsqueda por título
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<u32>,
}
