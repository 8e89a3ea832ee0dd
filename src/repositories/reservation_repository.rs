use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::reservation::{Reservation, ReservationDraft, ROOM_ALREADY_BOOKED};
use crate::utils::errors::{database_error, AppError, AppResult, RuleViolation};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Reservation>>;
    /// Reservas de una habitación, opcionalmente sin la reserva `exclude_id`
    async fn list_by_room(&self, room_id: i32, exclude_id: Option<i32>) -> AppResult<Vec<Reservation>>;
    async fn count_by_room(&self, room_id: i32) -> AppResult<i64>;
    async fn count_by_guest(&self, guest_id: i32) -> AppResult<i64>;
    async fn create(&self, draft: ReservationDraft) -> AppResult<Reservation>;
    async fn update(&self, id: i32, draft: ReservationDraft) -> AppResult<Reservation>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// La restricción `reservations_no_overlap` (23P01) equivale al rechazo por solapamiento
fn write_error(context: &str, e: sqlx::Error) -> AppError {
    let is_overlap = e
        .as_database_error()
        .and_then(|db| db.code())
        .map_or(false, |code| code == "23P01");

    if is_overlap {
        AppError::Rule(RuleViolation::Conflict(ROOM_ALREADY_BOOKED.to_string()))
    } else {
        database_error(context, e)
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn list(&self) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listando reservas", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando reserva", e))
    }

    async fn list_by_room(&self, room_id: i32, exclude_id: Option<i32>) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE room_id = $1 AND ($2::INTEGER IS NULL OR id <> $2)
            ORDER BY check_in
            "#,
        )
        .bind(room_id)
        .bind(exclude_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Error listando reservas de la habitación", e))
    }

    async fn count_by_room(&self, room_id: i32) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reservations WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Error contando reservas de la habitación", e))?;

        Ok(result.0)
    }

    async fn count_by_guest(&self, guest_id: i32) -> AppResult<i64> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reservations WHERE guest_id = $1")
            .bind(guest_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Error contando reservas del huésped", e))?;

        Ok(result.0)
    }

    async fn create(&self, draft: ReservationDraft) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations (room_id, guest_id, check_in, check_out, personas, status, total)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(draft.room_id)
        .bind(draft.guest_id)
        .bind(draft.check_in)
        .bind(draft.check_out)
        .bind(draft.personas)
        .bind(draft.status)
        .bind(draft.total)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Error creando reserva", e))
    }

    async fn update(&self, id: i32, draft: ReservationDraft) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET room_id = $2, guest_id = $3, check_in = $4, check_out = $5,
                personas = $6, status = $7, total = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(draft.room_id)
        .bind(draft.guest_id)
        .bind(draft.check_in)
        .bind(draft.check_out)
        .bind(draft.personas)
        .bind(draft.status)
        .bind(draft.total)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("Error actualizando reserva", e))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando reserva", e))?;

        Ok(())
    }
}
