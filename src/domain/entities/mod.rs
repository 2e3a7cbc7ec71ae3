//! # Entities Module
//!
//! 식별자를 가진 도메인 엔티티들입니다. 각 엔티티는 검증 생성자와
//! 불변식을 다시 검사하는 변경 메서드만 외부에 공개합니다.
//!
//! | 엔티티 | 컬렉션 | 참조 |
//! |--------|--------|------|
//! | [`users::User`] | `users` | - |
//! | [`rooms::Room`] | `rooms` | 호스트 ID, 이미지 소유 |
//! | [`reservations::Reservation`] | `reservations` | 숙소 ID, 게스트 ID |
//! | [`reviews::Review`] | `reviews` | 예약 ID |
//!
//! 엔티티 간 참조는 모두 `ObjectId`이며, 역참조 포인터는 두지 않습니다.

pub mod reservations;
pub mod reviews;
pub mod rooms;
pub mod users;
