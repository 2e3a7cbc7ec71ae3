//! # Review HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/reservations/{id}/reviews` | 리뷰 작성 | 201 Created |

use actix_web::{post, web, HttpResponse};

use crate::domain::dto::reviews::CreateReviewRequest;
use crate::errors::AppError;
use crate::handlers::{created, validate_request};
use crate::middlewares::CurrentUser;
use crate::services::reviews::ReviewService;
use crate::utils::string_utils::parse_object_id;

#[post("/{reservation_id}/reviews")]
pub async fn create_review(
    current_user: CurrentUser,
    reservation_id: web::Path<String>,
    payload: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;
    let reservation_id = parse_object_id(&reservation_id, "예약 ID")?;

    let review_id = ReviewService::instance()
        .create_review(current_user.id(), &reservation_id, payload.into_inner())
        .await?;

    Ok(created("/api/v1/reviews", &review_id))
}
