//! 이메일 값 객체

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::errors::{DomainError, DomainResult};
use crate::utils::string_utils::is_valid_string;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if !is_valid_string(&value) {
            return Err(DomainError::UserInvalidValue(
                "이메일은 비어있을 수 없습니다.".to_string(),
            ));
        }
        if !value.validate_email() {
            return Err(DomainError::UserInvalidValue(format!(
                "이메일 포맷을 만족해야 합니다. 현재 이메일 : {}",
                value
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(Email::new("guest@amabnb.com").is_ok());
        assert!(Email::new("").is_err());
        assert!(Email::new("not-an-email").is_err());
    }
}
