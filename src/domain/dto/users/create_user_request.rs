use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::{User, UserDraft, UserRole};
use crate::domain::errors::DomainResult;
use crate::domain::vo::{Email, PhoneNumber};
use crate::utils::string_utils::deserialize_optional_string;

/// 회원 가입 요청 DTO
///
/// 형식 검사는 `validator`가, 도메인 규칙(휴대폰 번호 패턴 등)은 값 객체가 담당합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    pub phone_number: String,

    pub user_role: UserRole,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub profile_img_path: Option<String>,
}

impl CreateUserRequest {
    pub fn to_user(self) -> DomainResult<User> {
        User::new(UserDraft {
            id: None,
            name: self.name,
            email: Email::new(self.email)?,
            phone_number: PhoneNumber::new(self.phone_number)?,
            user_role: self.user_role,
            profile_img_path: self.profile_img_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    fn request(phone_number: &str) -> CreateUserRequest {
        serde_json::from_value(serde_json::json!({
            "name": "아마비앤비",
            "email": "amabnb@gmail.com",
            "phone_number": phone_number,
            "user_role": "HOST",
        }))
        .unwrap()
    }

    #[test]
    fn test_to_user() {
        let user = request("010-2312-1231").to_user().unwrap();

        assert_eq!(user.user_role(), UserRole::Host);
        assert_eq!(user.profile_img_path(), None);
        assert!(user.id().is_none());
    }

    #[test]
    fn test_invalid_phone_number() {
        assert!(matches!(
            request("01023121231").to_user(),
            Err(DomainError::UserInvalidValue(_))
        ));
    }
}
