//! # 사용자 서비스
//!
//! 회원 가입을 담당합니다.
//!
//! ```rust,ignore
//! let user_service = UserService::instance();
//! let user_id = user_service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
