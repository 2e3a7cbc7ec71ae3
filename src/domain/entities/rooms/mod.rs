//! Rooms Entity Module
//!
//! 숙소([`Room`])와 숙소가 소유하는 이미지([`RoomImage`])를 정의합니다.

pub mod room;
pub mod room_image;
pub mod room_kind;

pub use room::{Room, RoomDraft};
pub use room_image::RoomImage;
pub use room_kind::{RoomScope, RoomType};
