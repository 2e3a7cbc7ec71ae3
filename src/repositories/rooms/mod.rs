//! # 숙소 리포지토리
//!
//! 숙소 이미지는 숙소 문서 안에 함께 저장되므로 숙소와 생명주기를 같이 합니다.

pub mod room_repo;

pub use room_repo::RoomRepository;
