//! # Data Transfer Objects
//!
//! API 경계에서 주고받는 요청/응답 객체입니다. 요청 DTO는 `validator`로 형식을 검사하고,
//! `to_*` 메서드로 값 객체와 엔티티를 만들면서 도메인 검증을 한 번 더 거칩니다.

use serde::{Deserialize, Serialize};

pub mod reservations;
pub mod reviews;
pub mod rooms;
pub mod users;

/// 생성된 리소스의 ID 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

impl IdResponse {
    pub fn new(id: &mongodb::bson::oid::ObjectId) -> Self {
        Self { id: id.to_hex() }
    }
}
