//! Modelo de Post
//!
//! Los posts viven en la base de datos local o en la API externa de posts.
//! El origen viaja explícitamente en cada post expuesto por la API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Origen de un post
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostOrigin {
    #[default]
    Local,
    External,
}

/// Post local con los datos de su autor (JOIN con users)
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct LocalPost {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author_username: Option<String>,
    pub author_email: Option<String>,
}

/// Post tal como lo devuelve la API externa
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPost {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostAuthor {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Post expuesto por la API, sea cual sea su origen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub user_id: i32,
    pub origin: PostOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<PostAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<LocalPost> for PostView {
    fn from(post: LocalPost) -> Self {
        let author = match (post.author_username, post.author_email) {
            (Some(username), Some(email)) => Some(PostAuthor {
                id: post.user_id,
                username,
                email,
            }),
            _ => None,
        };

        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            user_id: post.user_id,
            origin: PostOrigin::Local,
            author,
            created_at: Some(post.created_at),
            updated_at: Some(post.updated_at),
        }
    }
}

impl From<ExternalPost> for PostView {
    fn from(post: ExternalPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            user_id: post.user_id,
            origin: PostOrigin::External,
            author: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Datos para crear o reemplazar un post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i32,
}

/// Cambios parciales sobre un post
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,
}

impl From<NewPost> for PostChanges {
    fn from(post: NewPost) -> Self {
        Self {
            title: Some(post.title),
            body: Some(post.body),
            user_id: Some(post.user_id),
        }
    }
}
