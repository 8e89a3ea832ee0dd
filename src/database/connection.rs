//! Conexión a PostgreSQL
//!
//! Este módulo abre el pool de conexiones y aplica las migraciones de `migrations/`.

use sqlx::PgPool;
use tracing::info;

use crate::config::database::DatabaseConfig;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abrir el pool y verificar la conexión
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️ Conectando a {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        sqlx::query("SELECT 1").execute(&pool).await?;
        info!("✅ Conectado a PostgreSQL");
        Ok(Self { pool })
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("📜 Aplicando migraciones...");
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
