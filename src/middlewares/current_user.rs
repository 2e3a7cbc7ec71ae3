//! 호출자 식별 추출기

use actix_web::dev::Payload;
use actix_web::http::header::HeaderMap;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use log::debug;
use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

/// 인증된 사용자 ID를 담는 헤더
pub const USER_ID_HEADER: &str = "X-User-Id";

/// 요청을 보낸 사용자
///
/// 헤더가 없거나 `ObjectId` 형식이 아니면 401 Unauthorized로 응답합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    id: ObjectId,
}

impl CurrentUser {
    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let raw = headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| AppError::AuthenticationError("인증된 사용자 정보가 없습니다".to_string()))?
            .to_str()
            .map_err(|_| AppError::AuthenticationError("사용자 ID 헤더를 읽을 수 없습니다".to_string()))?;

        let id = ObjectId::parse_str(raw.trim()).map_err(|_| {
            debug!("잘못된 사용자 ID 헤더: {}", raw);
            AppError::AuthenticationError("유효하지 않은 사용자 ID입니다".to_string())
        })?;

        Ok(Self { id })
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req.headers()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extract_current_user() {
        let id = ObjectId::new();
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, id.to_hex()))
            .to_http_request();

        let current_user = CurrentUser::extract(&req).await.unwrap();

        assert_eq!(current_user.id(), &id);
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(
            CurrentUser::extract(&req).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_malformed_header_is_unauthorized() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "guest-1"))
            .to_http_request();

        assert!(matches!(
            CurrentUser::extract(&req).await,
            Err(AppError::AuthenticationError(_))
        ));
    }
}
