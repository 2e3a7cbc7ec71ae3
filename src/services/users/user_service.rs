//! 사용자 비즈니스 로직

use std::any::Any;
use std::sync::Arc;

use log::info;
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::{
    core::registry::ServiceRegistration,
    domain::{dto::users::CreateUserRequest, ports::UserStore},
    errors::AppError,
    repositories::UserRepository,
};

static USER_SERVICE: OnceCell<Arc<UserService>> = OnceCell::new();

/// 사용자 관리 서비스
///
/// `UserService::instance()`는 MongoDB 리포지토리를 사용하는 싱글톤을 반환하고,
/// 테스트는 `UserService::new`로 목 저장소를 주입합니다.
pub struct UserService {
    user_store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    pub fn instance() -> Arc<Self> {
        USER_SERVICE
            .get_or_init(|| Arc::new(Self::new(UserRepository::instance())))
            .clone()
    }

    /// 새 사용자 계정 생성
    ///
    /// # Errors
    ///
    /// * `Domain(UserInvalidValue)` - 이름, 이메일, 휴대폰 번호 형식 오류
    /// * `ConflictError` - 이미 가입된 휴대폰 번호
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<ObjectId, AppError> {
        let user = request.to_user()?;
        let saved = self.user_store.save(user).await?;

        let user_id = saved
            .id()
            .copied()
            .ok_or_else(|| AppError::InternalError("저장된 사용자에 ID가 없습니다".to_string()))?;

        info!("사용자 생성 완료: {} ({:?})", user_id, saved.user_role());
        Ok(user_id)
    }
}

fn construct_user_service() -> Box<dyn Any + Send + Sync> {
    Box::new(UserService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "user",
        constructor: construct_user_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::MockUserStore;

    fn request(phone_number: &str) -> CreateUserRequest {
        serde_json::from_value(serde_json::json!({
            "name": "아마비앤비",
            "email": "amabnb@gmail.com",
            "phone_number": phone_number,
            "user_role": "GUEST",
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_create_user_returns_saved_id() {
        let user_id = ObjectId::new();
        let mut user_store = MockUserStore::new();
        user_store.expect_save().times(1).returning(move |mut user| {
            user.assign_id(user_id);
            Ok(user)
        });

        let service = UserService::new(Arc::new(user_store));

        assert_eq!(service.create_user(request("010-2312-1231")).await.unwrap(), user_id);
    }

    #[actix_web::test]
    async fn test_create_user_rejects_invalid_phone_number() {
        let mut user_store = MockUserStore::new();
        user_store.expect_save().never();

        let service = UserService::new(Arc::new(user_store));
        let result = service.create_user(request("01023121231")).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::UserInvalidValue(_)))
        ));
    }

    #[actix_web::test]
    async fn test_create_user_propagates_conflict() {
        let mut user_store = MockUserStore::new();
        user_store
            .expect_save()
            .returning(|_| Err(AppError::ConflictError("이미 사용 중인 휴대폰 번호입니다".to_string())));

        let service = UserService::new(Arc::new(user_store));

        assert!(matches!(
            service.create_user(request("010-2312-1231")).await,
            Err(AppError::ConflictError(_))
        ));
    }
}
