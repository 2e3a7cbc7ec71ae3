//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 도메인 에러와 인프라 에러를
//! 하나의 타입으로 묶고, API 경계에서 HTTP 응답으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_room(&self, id: &ObjectId) -> Result<Room, AppError> {
//!     self.room_store
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("숙소를 찾을 수 없습니다".to_string()))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 도메인 규칙 위반 (상태 코드는 variant별로 결정)
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn domain_status(error: &DomainError) -> StatusCode {
        match error {
            DomainError::UserInvalidValue(_)
            | DomainError::RoomInvalidValue(_)
            | DomainError::ReservationInvalidValue(_)
            | DomainError::ReviewInvalidValue(_)
            | DomainError::MoneyInvalidValue(_)
            | DomainError::ReservationStatus
            | DomainError::ReservationOverMaxGuest
            | DomainError::ReservationInvalidPrice
            | DomainError::ReviewNotValidStatus => StatusCode::BAD_REQUEST,
            DomainError::ReservationNoPermission | DomainError::ReviewNoPermission => {
                StatusCode::FORBIDDEN
            }
            DomainError::AlreadyReview | DomainError::ReservationAlreadyExists => {
                StatusCode::CONFLICT
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Domain(error) => Self::domain_status(error),
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러를 상태 코드와 `{"error": ...}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("이름은 필수입니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("예약을 찾을 수 없습니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_value_errors_are_bad_request() {
        for error in [
            DomainError::UserInvalidValue("x".to_string()),
            DomainError::RoomInvalidValue("x".to_string()),
            DomainError::ReservationInvalidValue("x".to_string()),
            DomainError::ReviewInvalidValue("x".to_string()),
            DomainError::ReservationStatus,
            DomainError::ReviewNotValidStatus,
        ] {
            let response = AppError::from(error).error_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_review_errors_status() {
        assert_eq!(
            AppError::from(DomainError::AlreadyReview).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(DomainError::ReviewNoPermission).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_domain_error_message_is_transparent() {
        let error = AppError::from(DomainError::AlreadyReview);
        assert_eq!(error.to_string(), "이미 리뷰를 작성한 예약입니다");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");

        match result.context("Additional context") {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
