use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::rooms::{Room, RoomDraft, RoomImage, RoomScope, RoomType};
use crate::domain::errors::DomainResult;
use crate::domain::vo::{Money, RoomAddress, RoomOption};
use crate::utils::string_utils::{deserialize_optional_string, is_valid_string};

/// 숙소 등록 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 255, message = "숙소 이름은 1-255자 사이여야 합니다"))]
    pub name: String,

    #[validate(range(min = 0, max = 10_000_000, message = "가격은 0원 이상 천만원 이하여야 합니다"))]
    pub price: i64,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(range(min = 1, message = "최대 인원은 1명 이상이어야 합니다"))]
    pub max_guest_num: i32,

    #[validate(custom(function = "validate_zipcode"))]
    pub zipcode: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub address: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub detail_address: Option<String>,

    pub bed_cnt: u32,

    pub bed_room_cnt: u32,

    pub bath_room_cnt: u32,

    pub room_type: RoomType,

    pub room_scope: RoomScope,

    #[serde(default)]
    pub image_paths: Vec<String>,
}

impl CreateRoomRequest {
    /// 요청 필드를 값 객체로 감싸 [`Room`]을 만듭니다. 숙소의 모든 검증을 그대로 거칩니다.
    pub fn to_room(self, host_id: ObjectId) -> DomainResult<Room> {
        Room::new(RoomDraft {
            id: None,
            name: Some(self.name),
            price: Some(Money::new(self.price)?),
            description: Some(self.description),
            max_guest_num: self.max_guest_num,
            address: Some(RoomAddress::new(self.zipcode, self.address, self.detail_address)?),
            room_option: Some(RoomOption::new(self.bed_cnt, self.bed_room_cnt, self.bath_room_cnt)),
            room_type: Some(self.room_type),
            room_scope: Some(self.room_scope),
            host_id,
            room_images: self.image_paths.into_iter().map(RoomImage::new).collect(),
        })
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("blank")
            .with_message("빈 값일 수 없습니다".into()));
    }
    Ok(())
}

fn validate_zipcode(zipcode: &str) -> Result<(), ValidationError> {
    if zipcode.len() != 5 || !zipcode.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_zipcode")
            .with_message("우편번호는 숫자 5자리여야 합니다".into()));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::create_room_request;
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_to_room_maps_every_field() {
        let host_id = ObjectId::new();

        let room = create_room_request().to_room(host_id).unwrap();

        assert_eq!(room.name(), "방이름");
        assert_eq!(room.price().value(), 20_000);
        assert_eq!(room.address().detail_address(), Some("의창구"));
        assert_eq!(room.room_option(), RoomOption::new(2, 1, 1));
        assert_eq!(room.host_id(), &host_id);
        assert_eq!(room.room_images().len(), 2);
    }

    #[test]
    fn test_to_room_inherits_room_checks() {
        let mut request = create_room_request();
        request.max_guest_num = 0;

        assert!(matches!(
            request.to_room(ObjectId::new()),
            Err(DomainError::RoomInvalidValue(_))
        ));
    }

    #[test]
    fn test_request_validation() {
        assert!(create_room_request().validate().is_ok());

        let mut request = create_room_request();
        request.zipcode = "1234".to_string();
        request.price = 10_000_001;
        request.description = "  ".to_string();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("zipcode"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("description"));
    }
}
