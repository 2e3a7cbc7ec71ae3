//! 에러 처리 모듈
//!
//! [`AppError`]는 도메인 에러([`DomainError`](crate::domain::errors::DomainError))와
//! 인프라 에러를 묶는 애플리케이션 전역 에러 타입입니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
