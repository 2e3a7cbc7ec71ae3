//! 숙소 유형과 이용 범위

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Apartment,
    House,
    GuestHouse,
    Hotel,
}

/// 숙소 전체를 빌리는지, 일부 공간만 빌리는지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomScope {
    Private,
    Public,
}
