//! 숙소 주소 값 객체

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::utils::string_utils::{clean_optional_string, is_valid_string};

const ZIPCODE_LENGTH: usize = 5;

/// 우편번호(숫자 5자리) + 주소 + 상세 주소
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAddress {
    zipcode: String,
    address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail_address: Option<String>,
}

impl RoomAddress {
    pub fn new(
        zipcode: impl Into<String>,
        address: impl Into<String>,
        detail_address: Option<String>,
    ) -> DomainResult<Self> {
        let zipcode = zipcode.into();
        let address = address.into();

        if zipcode.len() != ZIPCODE_LENGTH || !zipcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::RoomInvalidValue(format!(
                "우편번호는 숫자 5자리여야 합니다. 현재 우편번호 : {}",
                zipcode
            )));
        }
        if !is_valid_string(&address) {
            return Err(DomainError::RoomInvalidValue(
                "숙소 주소는 비어있을 수 없습니다".to_string(),
            ));
        }

        Ok(Self {
            zipcode,
            address,
            detail_address: clean_optional_string(detail_address),
        })
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn detail_address(&self) -> Option<&str> {
        self.detail_address.as_deref()
    }
}
