use serde::{Deserialize, Serialize};

use crate::domain::entities::rooms::{Room, RoomScope, RoomType};

/// 숙소 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub max_guest_num: u32,
    pub zipcode: String,
    pub address: String,
    pub detail_address: Option<String>,
    pub bed_cnt: u32,
    pub bed_room_cnt: u32,
    pub bath_room_cnt: u32,
    pub room_type: RoomType,
    pub room_scope: RoomScope,
    pub image_paths: Vec<String>,
    pub host_id: String,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        let option = room.room_option();
        Self {
            id: room.id().map(|id| id.to_hex()).unwrap_or_default(),
            name: room.name().to_string(),
            price: room.price().value(),
            description: room.description().to_string(),
            max_guest_num: room.max_guest_num(),
            zipcode: room.address().zipcode().to_string(),
            address: room.address().address().to_string(),
            detail_address: room.address().detail_address().map(str::to_string),
            bed_cnt: option.bed_cnt(),
            bed_room_cnt: option.bed_room_cnt(),
            bath_room_cnt: option.bath_room_cnt(),
            room_type: room.room_type(),
            room_scope: room.room_scope(),
            image_paths: room
                .room_images()
                .iter()
                .map(|image| image.image_path().to_string())
                .collect(),
            host_id: room.host_id().to_hex(),
        }
    }
}
