pub mod auth_dto;
pub mod common_dto;
pub mod guest_dto;
pub mod post_dto;
pub mod reservation_dto;
pub mod room_dto;
