//! 휴대폰 번호 값 객체

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::utils::string_utils::is_valid_string;

static PHONE_NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^01\d-\d{3,4}-\d{4}$")
        .unwrap_or_else(|error| panic!("휴대폰 번호 정규식 컴파일 실패: {error}"))
});

/// `01X-XXX(X)-XXXX` 형식의 휴대폰 번호
///
/// 사용자 컬렉션에서 unique 인덱스가 걸리는 값입니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> DomainResult<Self> {
        let number = number.into();

        if !is_valid_string(&number) {
            return Err(DomainError::UserInvalidValue(
                "휴대폰 번호는 비어있을 수 없습니다.".to_string(),
            ));
        }
        if !PHONE_NUMBER_PATTERN.is_match(&number) {
            return Err(DomainError::UserInvalidValue(format!(
                "휴대폰 번호 포맷을 만족해야 합니다. 현재 휴대폰 번호 : {}",
                number
            )));
        }

        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PhoneNumber::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(number: PhoneNumber) -> Self {
        number.0
    }
}
