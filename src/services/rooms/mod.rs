//! # 숙소 서비스

pub mod create_room_service;

pub use create_room_service::CreateRoomService;
