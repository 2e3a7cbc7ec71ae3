//! # 사용자 리포지토리 구현
//!
//! MongoDB를 주 저장소로 사용하고, ID 조회는 Redis 캐시를 거칩니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::registry::Repository,
    db::Database,
    domain::{entities::users::User, ports::UserStore},
};
use crate::errors::errors::AppError;
use crate::repositories::{inserted_object_id, is_duplicate_key};

/// 사용자 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **키 패턴**: `user:{user_id}`
/// - **TTL**: [`CacheConfig::ttl_seconds`]
/// - 저장 시 해당 사용자의 캐시를 삭제합니다.
///
/// ## 인덱스
///
/// - `phone_number` (unique)
/// - `created_at` (desc)
#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 사용자 컬렉션 인덱스를 생성합니다.
    ///
    /// 휴대폰 번호 unique 인덱스가 동시 가입 시 중복을 막습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let phone_number_index = IndexModel::builder()
            .keys(doc! { "phone_number": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("phone_number_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([phone_number_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 사용 중인 휴대폰 번호입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.assign_id(inserted_object_id(result.inserted_id)?);
        Ok(user)
    }

    async fn replace(&self, id: ObjectId, user: User) -> Result<User, AppError> {
        self.collection::<User>()
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Err(e) = self.redis.del(&self.cache_key(&id.to_hex())).await {
            warn!("사용자 캐시 삭제 실패 ({}): {}", id, e);
        }

        Ok(user)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn save(&self, user: User) -> Result<User, AppError> {
        match user.id().copied() {
            Some(id) => self.replace(id, user).await,
            None => self.insert(user).await,
        }
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            debug!("사용자 캐시 적중: {}", cache_key);
            return Ok(Some(cached));
        }

        let user = self.collection::<User>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            if CacheConfig::is_enabled() {
                let _ = self.redis
                    .set_with_expiry(&cache_key, user, CacheConfig::ttl_seconds())
                    .await;
            }
        }

        Ok(user)
    }
}
