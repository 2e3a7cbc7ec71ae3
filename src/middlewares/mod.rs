//! # Request Identity
//!
//! 인증은 앞단 게이트웨이가 담당하며, 인증된 사용자 ID를 `X-User-Id` 헤더로 전달합니다.
//! [`CurrentUser`] 추출기가 이 헤더를 읽어 핸들러에 호출자 ID를 제공합니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_room(
//!     current_user: CurrentUser,
//!     payload: web::Json<CreateRoomRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let room_id = CreateRoomService::instance()
//!         .create_room(current_user.id(), payload.into_inner())
//!         .await?;
//!     // ...
//! }
//! ```

pub mod current_user;

pub use current_user::{CurrentUser, USER_ID_HEADER};
