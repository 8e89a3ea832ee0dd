use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::guest::{Guest, NewGuest};
use crate::utils::errors::{database_error, AppResult};

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Guest>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Guest>>;
    async fn find_by_document(&self, document: &str) -> AppResult<Option<Guest>>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Guest>>;
    async fn create(&self, guest: NewGuest) -> AppResult<Guest>;
    async fn update(&self, guest: Guest) -> AppResult<Guest>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct PgGuestRepository {
    pool: PgPool,
}

impl PgGuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find_by_column(&self, column: &str, value: &str) -> AppResult<Option<Guest>> {
        // `column` solo recibe literales de este módulo
        let query = format!("SELECT * FROM guests WHERE {} = $1", column);
        sqlx::query_as::<_, Guest>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando huésped", e))
    }
}

#[async_trait]
impl GuestRepository for PgGuestRepository {
    async fn list(&self) -> AppResult<Vec<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listando huéspedes", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Guest>> {
        sqlx::query_as::<_, Guest>("SELECT * FROM guests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando huésped", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Guest>> {
        self.find_by_column("name", name).await
    }

    async fn find_by_document(&self, document: &str) -> AppResult<Option<Guest>> {
        self.find_by_column("document", document).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Guest>> {
        self.find_by_column("email", email).await
    }

    async fn create(&self, guest: NewGuest) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            r#"
            INSERT INTO guests (name, document, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(guest.name)
        .bind(guest.document)
        .bind(guest.email)
        .bind(guest.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error creando huésped", e))
    }

    async fn update(&self, guest: Guest) -> AppResult<Guest> {
        sqlx::query_as::<_, Guest>(
            r#"
            UPDATE guests
            SET name = $2, document = $3, email = $4, phone = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(guest.id)
        .bind(guest.name)
        .bind(guest.document)
        .bind(guest.email)
        .bind(guest.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error actualizando huésped", e))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando huésped", e))?;

        Ok(())
    }
}
