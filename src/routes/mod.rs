//! Routers HTTP
//!
//! Un router por recurso; `lib::build_router` los monta bajo `/hotel`,
//! `/auth` y `/posts`.

pub mod auth_routes;
pub mod guest_routes;
pub mod post_routes;
pub mod reservation_routes;
pub mod room_routes;
