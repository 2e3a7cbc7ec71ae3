//! Room Entity Implementation
//!
//! 호스트가 등록하는 숙소 엔티티입니다. 숙소는 이미지 목록을 소유하며,
//! 모든 변경 메서드는 바뀌는 필드의 불변식을 다시 검사합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! let room = Room::new(RoomDraft {
//!     id: None,
//!     name: Some("방이름".to_string()),
//!     price: Some(Money::new(20_000)?),
//!     description: Some("방 설명 입니다".to_string()),
//!     max_guest_num: 1,
//!     address: Some(RoomAddress::new("00000", "창원", Some("의창구".to_string()))?),
//!     room_option: Some(RoomOption::new(1, 1, 1)),
//!     room_type: Some(RoomType::Apartment),
//!     room_scope: Some(RoomScope::Private),
//!     host_id,
//!     room_images: vec![],
//! })?;
//!
//! assert!(room.is_valid_price(Money::new(60_000)?, 3));
//! ```

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::room_image::RoomImage;
use super::room_kind::{RoomScope, RoomType};
use crate::domain::entities::users::User;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::vo::{Money, RoomAddress, RoomOption};
use crate::utils::string_utils::is_valid_string;

const MAX_NAME_LENGTH: usize = 255;
const MIN_GUEST_NUM: i32 = 1;

/// 숙소 생성 입력값
///
/// 빌더 대신 한 번에 검증되는 구조체입니다. `Option` 필드는 입력 누락을 표현하며,
/// `None`이면 [`Room::new`]가 `RoomInvalidValue`로 실패합니다.
#[derive(Debug, Clone)]
pub struct RoomDraft {
    pub id: Option<ObjectId>,
    pub name: Option<String>,
    pub price: Option<Money>,
    pub description: Option<String>,
    pub max_guest_num: i32,
    pub address: Option<RoomAddress>,
    pub room_option: Option<RoomOption>,
    pub room_type: Option<RoomType>,
    pub room_scope: Option<RoomScope>,
    pub host_id: ObjectId,
    pub room_images: Vec<RoomImage>,
}

/// 숙소 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    price: Money,
    description: String,
    max_guest_num: u32,
    address: RoomAddress,
    room_option: RoomOption,
    room_type: RoomType,
    room_scope: RoomScope,
    host_id: ObjectId,
    #[serde(default)]
    room_images: Vec<RoomImage>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl Room {
    /// 모든 필드를 검증하고 숙소를 생성합니다.
    ///
    /// 검사 순서: 이름, 최대 인원, 설명, 가격, 주소, 옵션, 유형, 이용 범위.
    pub fn new(draft: RoomDraft) -> DomainResult<Self> {
        let RoomDraft {
            id,
            name,
            price,
            description,
            max_guest_num,
            address,
            room_option,
            room_type,
            room_scope,
            host_id,
            room_images,
        } = draft;

        let name = Self::validate_name(name)?;
        let max_guest_num = Self::validate_max_guest_num(max_guest_num)?;
        let description = Self::validate_description(description)?;
        let price = Self::require(price, "가격을 입력하지 않았습니다")?;
        let address = Self::require(address, "숙소 주소를 입력하지 않았습니다")?;
        let room_option = Self::require(room_option, "숙소 옵션을 입력하지 않았습니다.")?;
        let room_type = Self::require(room_type, "숙소 유형이 정해지지 않았습니다")?;
        let room_scope = Self::require(room_scope, "숙소 이용 범위가 정해지지 않았습니다")?;

        let now = DateTime::now();
        let mut room = Self {
            id,
            name,
            price,
            description,
            max_guest_num,
            address,
            room_option,
            room_type,
            room_scope,
            host_id,
            room_images: Vec::with_capacity(room_images.len()),
            created_at: now,
            updated_at: now,
        };
        room.add_room_images(room_images);

        Ok(room)
    }

    pub fn add_room_images(&mut self, room_images: Vec<RoomImage>) {
        for room_image in room_images {
            self.add_room_image(room_image);
        }
    }

    /// 이미지를 추가합니다. 이미 붙어있는 이미지는 다시 추가되지 않습니다.
    pub fn add_room_image(&mut self, room_image: RoomImage) {
        if !self.room_images.contains(&room_image) {
            self.room_images.push(room_image);
        }
    }

    /// `total_price`가 정확히 `price * period`인지 확인합니다.
    pub fn is_valid_price(&self, total_price: Money, period: u32) -> bool {
        total_price == self.price.multiply(period)
    }

    pub fn is_over_max_guest_num(&self, total_guest: u32) -> bool {
        total_guest > self.max_guest_num
    }

    pub fn is_host(&self, user: &User) -> bool {
        user.has_id(&self.host_id)
    }

    pub fn change_name(&mut self, name: String) -> DomainResult<()> {
        if self.name != name {
            self.name = Self::validate_name(Some(name))?;
            self.touch();
        }
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) {
        if self.price != price {
            self.price = price;
            self.touch();
        }
    }

    pub fn change_description(&mut self, description: String) -> DomainResult<()> {
        if self.description != description {
            self.description = Self::validate_description(Some(description))?;
            self.touch();
        }
        Ok(())
    }

    pub fn change_max_guest_num(&mut self, max_guest_num: i32) -> DomainResult<()> {
        let max_guest_num = Self::validate_max_guest_num(max_guest_num)?;
        if self.max_guest_num != max_guest_num {
            self.max_guest_num = max_guest_num;
            self.touch();
        }
        Ok(())
    }

    pub fn change_room_option(&mut self, room_option: RoomOption) {
        if self.room_option != room_option {
            self.room_option = room_option;
            self.touch();
        }
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn max_guest_num(&self) -> u32 {
        self.max_guest_num
    }

    pub fn address(&self) -> &RoomAddress {
        &self.address
    }

    pub fn room_option(&self) -> RoomOption {
        self.room_option
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn room_scope(&self) -> RoomScope {
        self.room_scope
    }

    pub fn host_id(&self) -> &ObjectId {
        &self.host_id
    }

    pub fn room_images(&self) -> &[RoomImage] {
        &self.room_images
    }

    fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }

    fn validate_name(name: Option<String>) -> DomainResult<String> {
        match name {
            Some(name) if is_valid_string(&name) && name.chars().count() <= MAX_NAME_LENGTH => {
                Ok(name)
            }
            _ => Err(DomainError::RoomInvalidValue(
                "숙소 이름 입력값이 잘못됐습니다".to_string(),
            )),
        }
    }

    fn validate_max_guest_num(max_guest_num: i32) -> DomainResult<u32> {
        if max_guest_num < MIN_GUEST_NUM {
            return Err(DomainError::RoomInvalidValue(
                "최대 인원 수 입력값이 잘못됐습니다".to_string(),
            ));
        }
        u32::try_from(max_guest_num).map_err(|_| {
            DomainError::RoomInvalidValue("최대 인원 수 입력값이 잘못됐습니다".to_string())
        })
    }

    fn validate_description(description: Option<String>) -> DomainResult<String> {
        match description {
            Some(description) if is_valid_string(&description) => Ok(description),
            _ => Err(DomainError::RoomInvalidValue(
                "숙소 정보 입력값이 잘못됐습니다".to_string(),
            )),
        }
    }

    fn require<T>(value: Option<T>, message: &str) -> DomainResult<T> {
        value.ok_or_else(|| DomainError::RoomInvalidValue(message.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn room_draft(host_id: ObjectId) -> RoomDraft {
        RoomDraft {
            id: Some(ObjectId::new()),
            name: Some("방이름".to_string()),
            price: Some(Money::new(20_000).unwrap()),
            description: Some("방 설명 입니다".to_string()),
            max_guest_num: 1,
            address: Some(RoomAddress::new("00000", "창원", Some("의창구".to_string())).unwrap()),
            room_option: Some(RoomOption::new(1, 1, 1)),
            room_type: Some(RoomType::Apartment),
            room_scope: Some(RoomScope::Private),
            host_id,
            room_images: vec![],
        }
    }

    pub fn room(host_id: ObjectId) -> Room {
        Room::new(room_draft(host_id)).unwrap()
    }
}
