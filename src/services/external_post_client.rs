//! Cliente de la API externa de posts
//!
//! API compatible con JSONPlaceholder: `GET /posts[?_limit=&userId=&title_like=]`,
//! `GET|PUT|PATCH|DELETE /posts/:id` y `POST /posts`. Las escrituras solo se
//! simulan en el servicio remoto, pero se devuelven tal cual las responde.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::models::post::{ExternalPost, NewPost, PostChanges};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub const POST_NOT_FOUND: &str = "Post no encontrado";

#[derive(Debug, Clone)]
pub struct ExternalPostClient {
    base_url: String,
    client: Client,
}

impl ExternalPostClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("hotel_backend/0.1")
            .build()
            .map_err(|e| AppError::Internal(format!("No se pudo crear el cliente HTTP: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn post_url(&self, id: i32) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }

    /// Posts externos, opcionalmente limitados
    pub async fn list(&self, limit: Option<u32>) -> AppResult<Vec<ExternalPost>> {
        let mut request = self.client.get(self.posts_url());
        if let Some(limit) = limit {
            request = request.query(&[("_limit", limit)]);
        }
        self.send_json(request).await
    }

    pub async fn list_by_user(&self, user_id: i32, limit: Option<u32>) -> AppResult<Vec<ExternalPost>> {
        let mut request = self.client.get(self.posts_url()).query(&[("userId", user_id)]);
        if let Some(limit) = limit {
            request = request.query(&[("_limit", limit)]);
        }
        self.send_json(request).await
    }

    /// Búsqueda por título (`title_like`)
    pub async fn search_by_title(&self, term: &str, limit: Option<u32>) -> AppResult<Vec<ExternalPost>> {
        let mut request = self.client.get(self.posts_url()).query(&[("title_like", term)]);
        if let Some(limit) = limit {
            request = request.query(&[("_limit", limit)]);
        }
        self.send_json(request).await
    }

    pub async fn get(&self, id: i32) -> AppResult<ExternalPost> {
        self.send_json(self.client.get(self.post_url(id))).await
    }

    pub async fn create(&self, post: &NewPost) -> AppResult<ExternalPost> {
        self.send_json(self.client.post(self.posts_url()).json(post)).await
    }

    pub async fn update(&self, id: i32, post: &NewPost) -> AppResult<ExternalPost> {
        self.send_json(self.client.put(self.post_url(id)).json(post)).await
    }

    pub async fn patch(&self, id: i32, changes: &PostChanges) -> AppResult<ExternalPost> {
        self.send_json(self.client.patch(self.post_url(id)).json(changes)).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let response = self
            .client
            .delete(self.post_url(id))
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("DELETE posts/{}: {}", id, e)))?;
        Self::check_status(response.status())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> AppResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error de conexión: {}", e)))?;

        let status = response.status();
        log::debug!("📡 API de posts respondió {} ({})", status, response.url());
        Self::check_status(status)?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Respuesta inválida: {}", e)))
    }

    fn check_status(status: StatusCode) -> AppResult<()> {
        if status == StatusCode::NOT_FOUND {
            return Err(not_found_error(POST_NOT_FOUND));
        }
        if !status.is_success() {
            log::error!("❌ API de posts respondió con estado {}", status);
            return Err(AppError::ExternalApi(format!("Estado inesperado: {}", status)));
        }
        Ok(())
    }
}
