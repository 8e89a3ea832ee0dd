use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::post::{LocalPost, NewPost, PostChanges};
use crate::utils::errors::{database_error, AppError, AppResult};

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.body, p.user_id, p.created_at, p.updated_at,
           u.username AS author_username, u.email AS author_email
    FROM posts p
    LEFT JOIN users u ON u.id = p.user_id
"#;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Posts locales con su autor, opcionalmente de un solo usuario
    async fn list(&self, user_id: Option<i32>) -> AppResult<Vec<LocalPost>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<LocalPost>>;
    async fn create(&self, post: NewPost) -> AppResult<LocalPost>;
    /// Devuelve `None` si el post no existe
    async fn update(&self, id: i32, changes: PostChanges) -> AppResult<Option<LocalPost>>;
    /// Devuelve `false` si el post no existe
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn list(&self, user_id: Option<i32>) -> AppResult<Vec<LocalPost>> {
        let query = format!(
            "{} WHERE ($1::INTEGER IS NULL OR p.user_id = $1) ORDER BY p.id",
            SELECT_WITH_AUTHOR
        );
        sqlx::query_as::<_, LocalPost>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error obteniendo posts", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<LocalPost>> {
        let query = format!("{} WHERE p.id = $1", SELECT_WITH_AUTHOR);
        sqlx::query_as::<_, LocalPost>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando post", e))
    }

    async fn create(&self, post: NewPost) -> AppResult<LocalPost> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO posts (title, body, user_id) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(post.title)
        .bind(post.body)
        .bind(post.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error al crear post", e))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Post {} desaparecido tras crearlo", id)))
    }

    async fn update(&self, id: i32, changes: PostChanges) -> AppResult<Option<LocalPost>> {
        let updated: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title),
                body = COALESCE($3, body),
                user_id = COALESCE($4, user_id),
                updated_at = now()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.body)
        .bind(changes.user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error al actualizar post", e))?;

        match updated {
            Some(_) => self.find_by_id(id).await,
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error al eliminar post", e))?;

        Ok(result.rows_affected() > 0)
    }
}
