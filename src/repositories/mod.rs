//! Repositorios
//!
//! Un trait por entidad con dos implementaciones: PostgreSQL (`Pg*Repository`)
//! y el almacenamiento en memoria (`MemoryStore`).

pub mod guest_repository;
pub mod memory;
pub mod post_repository;
pub mod reservation_repository;
pub mod room_repository;
pub mod user_repository;

pub use guest_repository::{GuestRepository, PgGuestRepository};
pub use memory::MemoryStore;
pub use post_repository::{PgPostRepository, PostRepository};
pub use reservation_repository::{PgReservationRepository, ReservationRepository};
pub use room_repository::{PgRoomRepository, RoomRepository};
pub use user_repository::{PgUserRepository, UserRepository};
