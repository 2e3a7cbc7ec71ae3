//! # HTTP Handlers
//!
//! 요청 본문을 `validator`로 검사하고, 호출자 ID([`CurrentUser`](crate::middlewares::CurrentUser))와
//! 함께 서비스에 전달합니다. 생성 요청은 `201 Created`와 `Location` 헤더로 응답합니다.

use actix_web::HttpResponse;
use actix_web::http::header;
use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::IdResponse;
use crate::errors::AppError;

pub mod reservations;
pub mod reviews;
pub mod rooms;
pub mod users;

/// `validator` 검사 실패를 400 응답용 에러로 바꿉니다.
pub(crate) fn validate_request<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

/// `201 Created` + `Location: {base}/{id}` + `{"id": ...}`
pub(crate) fn created(base_path: &str, id: &ObjectId) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, format!("{}/{}", base_path, id.to_hex())))
        .json(IdResponse::new(id))
}
