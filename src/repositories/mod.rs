//! # Repositories
//!
//! [`crate::domain::ports`]의 MongoDB 구현입니다. 모든 리포지토리는
//! `#[repository]` 매크로로 싱글톤이 되며 `Database`와 `RedisClient`를 주입받습니다.
//!
//! | 리포지토리 | 컬렉션 | 캐시 |
//! |------------|--------|------|
//! | [`UserRepository`] | `users` | `user:{id}` |
//! | [`RoomRepository`] | `rooms` | `room:{id}` |
//! | [`ReservationRepository`] | `reservations` | 없음 |
//! | [`ReviewRepository`] | `reviews` | 없음 |

use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{Error, ErrorKind, WriteFailure};

use crate::errors::AppError;

pub mod reservations;
pub mod reviews;
pub mod rooms;
pub mod users;

pub use reservations::ReservationRepository;
pub use reviews::ReviewRepository;
pub use rooms::RoomRepository;
pub use users::UserRepository;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// unique 인덱스 위반 여부
pub(crate) fn is_duplicate_key(error: &Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// `insert_one` 결과의 `inserted_id`를 `ObjectId`로 꺼냅니다.
pub(crate) fn inserted_object_id(inserted_id: Bson) -> Result<ObjectId, AppError> {
    inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string()))
}

/// 모든 컬렉션의 인덱스를 생성합니다. 애플리케이션 기동 시 한 번 호출됩니다.
pub async fn create_all_indexes() -> Result<(), AppError> {
    UserRepository::instance().create_indexes().await?;
    RoomRepository::instance().create_indexes().await?;
    ReservationRepository::instance().create_indexes().await?;
    ReviewRepository::instance().create_indexes().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inserted_object_id() {
        let id = ObjectId::new();

        assert_eq!(inserted_object_id(Bson::ObjectId(id)).unwrap(), id);
        assert!(matches!(
            inserted_object_id(Bson::String("x".to_string())),
            Err(AppError::InternalError(_))
        ));
    }
}
