//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 캐시, Rate Limiting 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, CacheConfig};
//!
//! let env = Environment::current();
//! let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let ttl = CacheConfig::ttl_seconds();
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//!
//! # 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 캐시 TTL (초, 0이면 캐시 저장 안 함)
//! export CACHE_TTL_SECONDS="600"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! MongoDB(`MONGODB_URI`, `DATABASE_NAME`)와 Redis(`REDIS_URL`) 접속 정보는
//! 각각 [`crate::db`]와 [`crate::caching`]에서 읽습니다.

pub mod data_config;

pub use data_config::*;
