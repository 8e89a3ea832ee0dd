use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::signal;
use tracing::{error, info, warn};

use hotel_backend::build_router;
use hotel_backend::config::database::DatabaseConfig;
use hotel_backend::config::environment::{EnvironmentConfig, StorageBackend};
use hotel_backend::database::DatabaseConnection;
use hotel_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env().context("Configuración inválida")?;

    // Configurar logging
    let level = tracing::Level::from_str(&config.log_level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🏨 Hotel Backend - reservas, huéspedes y posts");
    info!("================================================");
    info!("🌍 Entorno: {}", config.environment);

    let app_state = match config.storage {
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .context("DATABASE_URL es obligatoria con STORAGE_BACKEND=postgres")?;
            let db_connection = match DatabaseConnection::new(&DatabaseConfig::new(url)).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            db_connection
                .run_migrations()
                .await
                .context("Error aplicando migraciones")?;
            info!("✅ Migraciones aplicadas");

            AppState::with_postgres(db_connection.pool().clone(), config.clone())?
        }
        StorageBackend::Memory => {
            warn!("⚠️ Almacenamiento en memoria: los datos se pierden al reiniciar");
            AppState::in_memory(config.clone())?
        }
    };
    info!("📰 API externa de posts: {}", app_state.external_posts.base_url());

    let app = build_router(app_state);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   CRUD /hotel/rooms, /hotel/guests, /hotel/reservations");
    info!("   POST /auth/register, /auth/login - GET /auth/me");
    info!("   GET  /posts, /posts/feed, /posts/search, /posts/external/:id");
    info!("   POST /posts - GET|PUT|PATCH|DELETE /posts/:id?origin=local|external");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
