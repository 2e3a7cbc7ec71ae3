//! 아마비앤비 숙소 예약 서비스 백엔드
//!
//! 호스트는 숙소를 등록하고, 게스트는 숙소를 예약하며, 숙박이 끝난 게스트는 리뷰를 남깁니다.
//! 예약 상태 전이, 가격 검증, 리뷰 작성 자격 같은 도메인 규칙은 엔티티와 값 객체가 직접 검사합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 호출자 식별 (X-User-Id)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 엔티티 조회, 도메인 규칙 조합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Domain Ports   │ ← UserStore, RoomStore, ReservationStore, ReviewStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB + Redis
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use amabnb_backend::services::reviews::ReviewService;
//!
//! let review_id = ReviewService::instance()
//!     .create_review(&user_id, &reservation_id, request)
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
