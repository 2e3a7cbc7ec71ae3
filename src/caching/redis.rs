//! # Redis 캐시 클라이언트
//!
//! 멀티플렉싱된 비동기 연결 위에서 JSON 직렬화된 값을 읽고 씁니다.
//! 캐시 실패는 호출하는 리포지토리에서 무시되며, 원본 데이터는 항상 MongoDB에 있습니다.

use log::info;
use redis::{AsyncCommands, Client};
use serde::{Serialize, de::DeserializeOwned};
use std::env;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set_with_expiry("user:65f1c0...", &user, 600).await?;
/// let cached: Option<User> = redis.get("user:65f1c0...").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)로 연결하고 PING으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 키에 저장된 JSON을 `T`로 역직렬화해 반환합니다. 키가 없으면 `None`입니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => {
                let deserialized = serde_json::from_str(&json)
                    .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))?;
                Ok(Some(deserialized))
            }
            None => Ok(None),
        }
    }

    /// TTL(초)과 함께 값을 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = Self::to_json(value)?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    /// `#[repository]`가 생성하는 `invalidate_pattern_cache`가 `keys`와 함께 사용합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String, redis::RedisError> {
        serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))
    }
}
