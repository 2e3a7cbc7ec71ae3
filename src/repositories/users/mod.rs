//! # 사용자 리포지토리
//!
//! MongoDB `users` 컬렉션과 Redis 캐시를 사용하는 [`UserStore`](crate::domain::ports::UserStore) 구현입니다.
//!
//! ```rust,ignore
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_id(&user_id).await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
