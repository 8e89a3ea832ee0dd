//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las claves tienen un valor por defecto salvo `DATABASE_URL`, que solo
//! se exige con el almacenamiento PostgreSQL.

use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;

/// Backend de almacenamiento de la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!("STORAGE_BACKEND desconocido: '{}'", other)),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub bcrypt_cost: u32,
    pub cors_origins: Vec<String>,
    pub external_posts_url: String,
    pub external_timeout_secs: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            storage: StorageBackend::Postgres,
            database_url: None,
            jwt_secret: "dev-secret-change-me".to_string(),
            jwt_expiration: 86_400,
            bcrypt_cost: 10,
            cors_origins: Vec::new(),
            external_posts_url: "https://jsonplaceholder.typicode.com".to_string(),
            external_timeout_secs: 10,
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Cargar la configuración desde una función de búsqueda de claves
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or(default);

        let config = Self {
            environment: text("ENVIRONMENT", defaults.environment),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            host: text("HOST", defaults.host),
            log_level: text("LOG_LEVEL", defaults.log_level),
            storage: parse_or(&lookup, "STORAGE_BACKEND", defaults.storage)?,
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            jwt_secret: text("JWT_SECRET", defaults.jwt_secret),
            jwt_expiration: parse_or(&lookup, "JWT_EXPIRATION", defaults.jwt_expiration)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", defaults.bcrypt_cost)?,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            external_posts_url: text("EXTERNAL_POSTS_URL", defaults.external_posts_url)
                .trim_end_matches('/')
                .to_string(),
            external_timeout_secs: parse_or(&lookup, "EXTERNAL_TIMEOUT_SECS", defaults.external_timeout_secs)?,
        };

        if config.storage == StorageBackend::Postgres && config.database_url.is_none() {
            return Err(anyhow!("DATABASE_URL must be set when STORAGE_BACKEND=postgres"));
        }

        Ok(config)
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("{} must be a valid value, got '{}'", key, raw)),
        None => Ok(default),
    }
}
