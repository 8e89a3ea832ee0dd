use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::room::{NewRoom, Room};
use crate::utils::errors::{database_error, AppResult};

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Room>>;
    async fn find_by_number(&self, number: &str) -> AppResult<Option<Room>>;
    async fn create(&self, room: NewRoom) -> AppResult<Room>;
    async fn update(&self, room: Room) -> AppResult<Room>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    async fn list(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listando habitaciones", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando habitación", e))
    }

    async fn find_by_number(&self, number: &str) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE number = $1")
            .bind(number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando habitación por número", e))
    }

    async fn create(&self, room: NewRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (number, room_type, capacity, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(room.number)
        .bind(room.room_type)
        .bind(room.capacity)
        .bind(room.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error creando habitación", e))
    }

    async fn update(&self, room: Room) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET number = $2, room_type = $3, capacity = $4, status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(room.id)
        .bind(room.number)
        .bind(room.room_type)
        .bind(room.capacity)
        .bind(room.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("Error actualizando habitación", e))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando habitación", e))?;

        Ok(())
    }
}
