//! # Core Module
//!
//! 싱글톤 레지스트리와 에러 타입 재노출을 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 컨테이너
//! - **ServiceLocator**: 인프라 싱글톤(`Database`, `RedisClient`)과 리포지토리/서비스 인스턴스 보관
//! - **자동 등록**: `inventory` 기반으로 `#[repository]` 매크로와 서비스의 등록 정보를 수집
//!
//! ### [`errors`] - [`crate::errors::errors`] 재노출
//! `#[repository]` 매크로가 생성하는 코드가 이 경로를 사용합니다.
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! ServiceLocator::set(Arc::new(Database::new().await?));
//! ServiceLocator::set(Arc::new(RedisClient::new().await?));
//! ServiceLocator::initialize_all().await?;
//!
//! let review_service = ReviewService::instance();
//! ```

pub mod registry;

pub use crate::errors::errors;
pub use registry::*;
