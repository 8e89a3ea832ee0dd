//! Servicio de posts
//!
//! Une los posts locales con los de la API externa y despacha cada
//! escritura según su `PostOrigin`.

use futures::try_join;
use std::sync::Arc;

use crate::models::post::{NewPost, PostChanges, PostOrigin, PostView};
use crate::repositories::{PostRepository, UserRepository};
use crate::services::external_post_client::{ExternalPostClient, POST_NOT_FOUND};
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::validation::contains_ignore_case;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    external: ExternalPostClient,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>, external: ExternalPostClient) -> Self {
        Self { posts, users, external }
    }

    pub async fn list_local(&self) -> AppResult<Vec<PostView>> {
        let posts = self.posts.list(None).await?;
        Ok(posts.into_iter().map(PostView::from).collect())
    }

    /// Posts locales seguidos de los externos; `limit` acota los externos
    pub async fn feed(&self, user_id: Option<i32>, limit: Option<u32>) -> AppResult<Vec<PostView>> {
        let external = async {
            match user_id {
                Some(user_id) => self.external.list_by_user(user_id, limit).await,
                None => self.external.list(limit).await,
            }
        };
        let (local, external) = try_join!(self.posts.list(user_id), external)?;

        log::info!("📰 Feed: {} posts locales, {} externos", local.len(), external.len());
        Ok(local
            .into_iter()
            .map(PostView::from)
            .chain(external.into_iter().map(PostView::from))
            .collect())
    }

    /// Búsqueda por título en ambos orígenes; un término vacío no devuelve nada
    pub async fn search(&self, term: &str, limit: Option<u32>) -> AppResult<Vec<PostView>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let (local, external) = try_join!(self.posts.list(None), self.external.search_by_title(term, limit))?;

        let mut local: Vec<PostView> = local
            .into_iter()
            .filter(|p| contains_ignore_case(&p.title, term))
            .map(PostView::from)
            .collect();
        if let Some(limit) = limit {
            local.truncate(limit as usize);
        }

        local.extend(external.into_iter().map(PostView::from));
        Ok(local)
    }

    pub async fn get_external(&self, id: i32) -> AppResult<PostView> {
        Ok(self.external.get(id).await?.into())
    }

    pub async fn get(&self, origin: PostOrigin, id: i32) -> AppResult<PostView> {
        match origin {
            PostOrigin::Local => self
                .posts
                .find_by_id(id)
                .await?
                .map(PostView::from)
                .ok_or_else(|| not_found_error(POST_NOT_FOUND)),
            PostOrigin::External => self.get_external(id).await,
        }
    }

    pub async fn create(&self, origin: PostOrigin, post: NewPost) -> AppResult<PostView> {
        match origin {
            PostOrigin::Local => {
                if self.users.find_by_id(post.user_id).await?.is_none() {
                    return Err(bad_request_error("Error al crear post"));
                }
                let created = self.posts.create(post).await?;
                log::info!("📝 Post local {} creado", created.id);
                Ok(created.into())
            }
            PostOrigin::External => Ok(self.external.create(&post).await?.into()),
        }
    }

    /// Reemplazo completo (PUT)
    pub async fn replace(&self, origin: PostOrigin, id: i32, post: NewPost) -> AppResult<PostView> {
        match origin {
            PostOrigin::Local => self.update_local(id, post.into()).await,
            PostOrigin::External => Ok(self.external.update(id, &post).await?.into()),
        }
    }

    /// Cambios parciales (PATCH)
    pub async fn patch(&self, origin: PostOrigin, id: i32, changes: PostChanges) -> AppResult<PostView> {
        match origin {
            PostOrigin::Local => self.update_local(id, changes).await,
            PostOrigin::External => Ok(self.external.patch(id, &changes).await?.into()),
        }
    }

    pub async fn delete(&self, origin: PostOrigin, id: i32) -> AppResult<()> {
        match origin {
            PostOrigin::Local => {
                if self.posts.delete(id).await? {
                    log::info!("🗑️ Post local {} eliminado", id);
                    Ok(())
                } else {
                    Err(not_found_error(POST_NOT_FOUND))
                }
            }
            PostOrigin::External => self.external.delete(id).await,
        }
    }

    async fn update_local(&self, id: i32, changes: PostChanges) -> AppResult<PostView> {
        if let Some(user_id) = changes.user_id {
            if self.users.find_by_id(user_id).await?.is_none() {
                return Err(bad_request_error("Error al actualizar post"));
            }
        }
        self.posts
            .update(id, changes)
            .await?
            .map(PostView::from)
            .ok_or_else(|| not_found_error(POST_NOT_FOUND))
    }
}
