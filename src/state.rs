//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Los repositorios son traits, de modo que el
//! mismo router funciona sobre PostgreSQL o sobre el almacenamiento en memoria.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::{
    GuestRepository, MemoryStore, PgGuestRepository, PgPostRepository, PgReservationRepository,
    PgRoomRepository, PgUserRepository, PostRepository, ReservationRepository, RoomRepository,
    UserRepository,
};
use crate::services::{ExternalPostClient, PostService, ReservationValidator};
use crate::utils::errors::AppResult;
use crate::utils::jwt::JwtConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub rooms: Arc<dyn RoomRepository>,
    pub guests: Arc<dyn GuestRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub external_posts: ExternalPostClient,
    /// Serializa validar-y-guardar de las reservas dentro del proceso
    pub reservation_gate: Arc<Mutex<()>>,
}

impl AppState {
    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(pool: PgPool, config: EnvironmentConfig) -> AppResult<Self> {
        let external_posts = Self::external_client(&config)?;
        Ok(Self {
            rooms: Arc::new(PgRoomRepository::new(pool.clone())),
            guests: Arc::new(PgGuestRepository::new(pool.clone())),
            reservations: Arc::new(PgReservationRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool.clone())),
            posts: Arc::new(PgPostRepository::new(pool)),
            external_posts,
            reservation_gate: Arc::new(Mutex::new(())),
            config,
        })
    }

    /// Estado sobre un único `MemoryStore` compartido por todos los repositorios
    pub fn in_memory(config: EnvironmentConfig) -> AppResult<Self> {
        let external_posts = Self::external_client(&config)?;
        let store = Arc::new(MemoryStore::new());
        Ok(Self {
            rooms: store.clone(),
            guests: store.clone(),
            reservations: store.clone(),
            users: store.clone(),
            posts: store,
            external_posts,
            reservation_gate: Arc::new(Mutex::new(())),
            config,
        })
    }

    fn external_client(config: &EnvironmentConfig) -> AppResult<ExternalPostClient> {
        ExternalPostClient::new(
            config.external_posts_url.clone(),
            Duration::from_secs(config.external_timeout_secs),
        )
    }

    pub fn reservation_validator(&self) -> ReservationValidator {
        ReservationValidator::new(self.rooms.clone(), self.guests.clone(), self.reservations.clone())
    }

    pub fn post_service(&self) -> PostService {
        PostService::new(self.posts.clone(), self.users.clone(), self.external_posts.clone())
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig::from(&self.config)
    }
}
