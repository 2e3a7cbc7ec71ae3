//! # 숙소 리포지토리 구현

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    caching::redis::RedisClient,
    config::CacheConfig,
    core::registry::Repository,
    db::Database,
    domain::{entities::rooms::Room, ports::RoomStore},
};
use crate::errors::errors::AppError;
use crate::repositories::inserted_object_id;

/// 숙소 데이터 액세스 리포지토리
///
/// - **키 패턴**: `room:{room_id}`
/// - **인덱스**: `host_id`
#[repository(name = "room", collection = "rooms")]
pub struct RoomRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl RoomRepository {
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let host_index = IndexModel::builder()
            .keys(doc! { "host_id": 1 })
            .options(IndexOptions::builder()
                .name("host_id".to_string())
                .build())
            .build();

        self.collection::<Room>()
            .create_index(host_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl RoomStore for RoomRepository {
    async fn save(&self, mut room: Room) -> Result<Room, AppError> {
        match room.id().copied() {
            Some(id) => {
                self.collection::<Room>()
                    .replace_one(doc! { "_id": id }, &room)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                if let Err(e) = self.redis.del(&self.cache_key(&id.to_hex())).await {
                    warn!("숙소 캐시 삭제 실패 ({}): {}", id, e);
                }
            }
            None => {
                let result = self.collection::<Room>()
                    .insert_one(&room)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                room.assign_id(inserted_object_id(result.inserted_id)?);
            }
        }

        Ok(room)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Room>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<Room>(&cache_key).await {
            debug!("숙소 캐시 적중: {}", cache_key);
            return Ok(Some(cached));
        }

        let room = self.collection::<Room>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref room) = room {
            if CacheConfig::is_enabled() {
                let _ = self.redis
                    .set_with_expiry(&cache_key, room, CacheConfig::ttl_seconds())
                    .await;
            }
        }

        Ok(room)
    }

    async fn find_by_host_id(&self, host_id: &ObjectId) -> Result<Vec<Room>, AppError> {
        let cursor = self.collection::<Room>()
            .find(doc! { "host_id": *host_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
