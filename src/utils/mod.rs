//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! extractores HTTP y JWT.

pub mod errors;
pub mod extract;
pub mod jwt;
pub mod validation;
