//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 회원 가입 | 201 Created |

use actix_web::{post, web, HttpResponse};

use crate::domain::dto::users::CreateUserRequest;
use crate::errors::AppError;
use crate::handlers::{created, validate_request};
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let user_id = UserService::instance()
        .create_user(payload.into_inner())
        .await?;

    Ok(created("/api/v1/users", &user_id))
}
