//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL de `migrations/`.

pub mod guest;
pub mod post;
pub mod reservation;
pub mod room;
pub mod user;
