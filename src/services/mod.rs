//! Servicios de negocio
//!
//! Validador de reservas, guardas de borrado y la integración de posts
//! locales con la API externa.

pub mod deletion_guard;
pub mod external_post_client;
pub mod post_service;
pub mod reservation_validator;

pub use external_post_client::ExternalPostClient;
pub use post_service::PostService;
pub use reservation_validator::ReservationValidator;
