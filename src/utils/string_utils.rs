//! 문자열 및 식별자 처리 유틸리티

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::errors::AppError;

/// 공백을 제외한 내용이 있는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 앞뒤 공백을 제거하고, 빈 문자열은 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde용 선택 문자열 역직렬화 (빈 문자열은 `None`)
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 경로나 요청 본문의 16진수 ID를 `ObjectId`로 변환합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim()).map_err(|_| {
        AppError::ValidationError(format!("유효하지 않은 {} 형식입니다: {}", field_name, value))
    })
}
