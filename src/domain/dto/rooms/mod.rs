//! 숙소 DTO

pub mod create_room_request;
pub mod room_response;

pub use create_room_request::CreateRoomRequest;
pub use room_response::RoomResponse;
