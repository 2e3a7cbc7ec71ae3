//! 값 객체 모듈
//!
//! 식별자 없이 값으로만 비교되는 불변 타입들입니다. 모든 생성자는 검증을 거치며,
//! 실패 시 [`DomainError`](crate::domain::errors::DomainError)를 반환합니다.

pub mod email;
pub mod money;
pub mod phone_number;
pub mod reservation_date;
pub mod room_address;
pub mod room_option;

pub use email::Email;
pub use money::Money;
pub use phone_number::PhoneNumber;
pub use reservation_date::ReservationDate;
pub use room_address::RoomAddress;
pub use room_option::RoomOption;
