use validator::Validate;

use crate::dto::post_dto::{FeedQuery, PatchPostRequest, PostRequest, SearchQuery};
use crate::models::post::{PostOrigin, PostView};
use crate::services::PostService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct PostController {
    service: PostService,
}

impl PostController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.post_service(),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<PostView>> {
        self.service.list_local().await
    }

    pub async fn feed(&self, query: FeedQuery) -> AppResult<Vec<PostView>> {
        self.service.feed(query.user_id, query.limit).await
    }

    pub async fn search(&self, query: SearchQuery) -> AppResult<Vec<PostView>> {
        let term = query.q.unwrap_or_default();
        self.service.search(&term, query.limit).await
    }

    pub async fn get_external(&self, id: i32) -> AppResult<PostView> {
        self.service.get_external(id).await
    }

    pub async fn get(&self, id: i32, origin: PostOrigin) -> AppResult<PostView> {
        self.service.get(origin, id).await
    }

    pub async fn create(&self, request: PostRequest) -> AppResult<PostView> {
        request.validate()?;
        let (origin, post) = request.into_new_post(None);
        self.service.create(origin, post).await
    }

    /// PUT: el origen de la query prevalece sobre el del cuerpo
    pub async fn replace(&self, id: i32, origin: Option<PostOrigin>, request: PostRequest) -> AppResult<PostView> {
        request.validate()?;
        let (origin, post) = request.into_new_post(origin);
        self.service.replace(origin, id, post).await
    }

    pub async fn patch(&self, id: i32, origin: PostOrigin, request: PatchPostRequest) -> AppResult<PostView> {
        request.validate()?;
        self.service.patch(origin, id, request.into()).await
    }

    pub async fn delete(&self, id: i32, origin: PostOrigin) -> AppResult<()> {
        self.service.delete(origin, id).await
    }
}
