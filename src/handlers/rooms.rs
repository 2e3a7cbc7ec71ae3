//! # Room HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/rooms` | 숙소 등록 (호출자가 호스트) | 201 Created |
//! | `GET` | `/api/v1/host/rooms` | 호출자가 등록한 숙소 목록 | 200 OK |

use actix_web::{get, post, web, HttpResponse};

use crate::domain::dto::rooms::CreateRoomRequest;
use crate::errors::AppError;
use crate::handlers::{created, validate_request};
use crate::middlewares::CurrentUser;
use crate::services::rooms::CreateRoomService;

#[post("")]
pub async fn create_room(
    current_user: CurrentUser,
    payload: web::Json<CreateRoomRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let room_id = CreateRoomService::instance()
        .create_room(current_user.id(), payload.into_inner())
        .await?;

    Ok(created("/api/v1/rooms", &room_id))
}

#[get("/rooms")]
pub async fn get_host_rooms(current_user: CurrentUser) -> Result<HttpResponse, AppError> {
    let rooms = CreateRoomService::instance()
        .find_rooms_by_host(current_user.id())
        .await?;

    Ok(HttpResponse::Ok().json(rooms))
}
