//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 읽기 캐시와 JSON 기반 직렬화를 제공합니다.
//! 사용자와 숙소 조회가 이 캐시를 거칩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//! use crate::config::CacheConfig;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("room:65f1c0...", &room, CacheConfig::ttl_seconds()).await?;
//!
//! let cached: Option<Room> = cache.get("room:65f1c0...").await?;
//! cache.del("room:65f1c0...").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
