//! User Entity Implementation
//!
//! 게스트와 호스트를 모두 표현하는 사용자 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::vo::{Email, PhoneNumber};
use crate::utils::string_utils::{clean_optional_string, is_valid_string};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Guest,
    Host,
}

/// 사용자 생성에 필요한 값 묶음
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: Email,
    pub phone_number: PhoneNumber,
    pub user_role: UserRole,
    pub profile_img_path: Option<String>,
}

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: Email,
    /// 사용자 컬렉션의 unique 인덱스 대상
    phone_number: PhoneNumber,
    user_role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_img_path: Option<String>,
    created_at: DateTime,
    updated_at: DateTime,
}

impl User {
    pub fn new(draft: UserDraft) -> DomainResult<Self> {
        if !is_valid_string(&draft.name) {
            return Err(DomainError::UserInvalidValue(
                "이름은 비어있을 수 없습니다.".to_string(),
            ));
        }

        let now = DateTime::now();
        Ok(Self {
            id: draft.id,
            name: draft.name,
            email: draft.email,
            phone_number: draft.phone_number,
            user_role: draft.user_role,
            profile_img_path: clean_optional_string(draft.profile_img_path),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    /// 저장 후 부여된 ID를 설정합니다. 리포지토리에서만 사용합니다.
    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub fn user_role(&self) -> UserRole {
        self.user_role
    }

    pub fn profile_img_path(&self) -> Option<&str> {
        self.profile_img_path.as_deref()
    }

    pub fn created_at(&self) -> DateTime {
        self.created_at
    }

    /// 주어진 ID가 이 사용자의 ID인지 확인합니다. 저장되지 않은 사용자는 항상 `false`입니다.
    pub fn has_id(&self, id: &ObjectId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// 식별자 기준 동일성 비교
    pub fn is_same(&self, other: &User) -> bool {
        match (&self.id, &other.id) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }
}
