//! Middleware del sistema
//!
//! Autenticación JWT para las rutas protegidas y CORS para los clientes web.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
