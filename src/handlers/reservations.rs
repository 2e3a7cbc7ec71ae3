//! # Reservation HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/reservations` | 예약 생성 | 201 Created |
//! | `PATCH` | `/api/v1/reservations/{id}` | 예약 변경 (게스트) | 200 OK |
//! | `DELETE` | `/api/v1/reservations/{id}` | 예약 취소 (게스트) | 204 No Content |
//! | `POST` | `/api/v1/host/reservations/{id}/complete` | 숙박 완료 (호스트) | 204 No Content |
//! | `POST` | `/api/v1/host/reservations/{id}/cancel` | 예약 취소 (호스트) | 204 No Content |

use actix_web::{delete, patch, post, web, HttpResponse};

use crate::domain::dto::reservations::{CreateReservationRequest, ModifyReservationRequest};
use crate::errors::AppError;
use crate::handlers::{created, validate_request};
use crate::middlewares::CurrentUser;
use crate::services::reservations::{ReservationGuestService, ReservationHostService};
use crate::utils::string_utils::parse_object_id;

#[post("")]
pub async fn create_reservation(
    current_user: CurrentUser,
    payload: web::Json<CreateReservationRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let reservation_id = ReservationGuestService::instance()
        .create_reservation(current_user.id(), payload.into_inner())
        .await?;

    Ok(created("/api/v1/reservations", &reservation_id))
}

#[patch("/{reservation_id}")]
pub async fn modify_reservation(
    current_user: CurrentUser,
    reservation_id: web::Path<String>,
    payload: web::Json<ModifyReservationRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;
    let reservation_id = parse_object_id(&reservation_id, "예약 ID")?;

    let response = ReservationGuestService::instance()
        .modify_reservation(current_user.id(), &reservation_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[delete("/{reservation_id}")]
pub async fn cancel_reservation(
    current_user: CurrentUser,
    reservation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let reservation_id = parse_object_id(&reservation_id, "예약 ID")?;

    ReservationGuestService::instance()
        .cancel_reservation(current_user.id(), &reservation_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/reservations/{reservation_id}/complete")]
pub async fn complete_reservation_by_host(
    current_user: CurrentUser,
    reservation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let reservation_id = parse_object_id(&reservation_id, "예약 ID")?;

    ReservationHostService::instance()
        .complete_reservation(current_user.id(), &reservation_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[post("/reservations/{reservation_id}/cancel")]
pub async fn cancel_reservation_by_host(
    current_user: CurrentUser,
    reservation_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let reservation_id = parse_object_id(&reservation_id, "예약 ID")?;

    ReservationHostService::instance()
        .cancel_reservation(current_user.id(), &reservation_id)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}
