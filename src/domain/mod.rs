//! # Domain Layer Module
//!
//! 숙소, 예약, 리뷰 도메인의 핵심 규칙을 담당하는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── vo        - 값 객체 (Money, PhoneNumber, RoomAddress, ...)
//! ├── entities  - 엔티티 (User, Room, Reservation, Review)
//! ├── ports     - 영속성 포트 (서비스가 의존하는 저장소 trait)
//! ├── dto       - 요청/응답 객체
//! └── errors    - 도메인 규칙 위반 에러
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 도메인 계층은 HTTP에 의존하지 않습니다. 모든 규칙 위반은
//! [`errors::DomainError`]로 표현되고, API 경계에서 상태 코드로 변환됩니다.

pub mod dto;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod vo;
