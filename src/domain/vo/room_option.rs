//! 숙소 옵션 값 객체

use serde::{Deserialize, Serialize};

/// 침대, 침실, 욕실 수
///
/// 음수는 타입(`u32`)으로 배제됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoomOption {
    bed_cnt: u32,
    bed_room_cnt: u32,
    bath_room_cnt: u32,
}

impl RoomOption {
    pub fn new(bed_cnt: u32, bed_room_cnt: u32, bath_room_cnt: u32) -> Self {
        Self {
            bed_cnt,
            bed_room_cnt,
            bath_room_cnt,
        }
    }

    pub fn bed_cnt(&self) -> u32 {
        self.bed_cnt
    }

    pub fn bed_room_cnt(&self) -> u32 {
        self.bed_room_cnt
    }

    pub fn bath_room_cnt(&self) -> u32 {
        self.bath_room_cnt
    }
}
