//! Controladores
//!
//! Traducen las operaciones de los repositorios y servicios a respuestas
//! o `AppError`. Se construyen por petición a partir del `AppState`.

pub mod auth_controller;
pub mod guest_controller;
pub mod post_controller;
pub mod reservation_controller;
pub mod room_controller;
