//! # Services
//!
//! 도메인 규칙을 조합하는 애플리케이션 서비스입니다. 각 서비스는 `instance()`로
//! MongoDB 리포지토리를 사용하는 싱글톤을 제공하고, `inventory`로 레지스트리에 등록됩니다.
//!
//! - [`users::UserService`] - 회원 가입
//! - [`rooms::CreateRoomService`] - 숙소 등록, 호스트 숙소 조회
//! - [`reservations::ReservationGuestService`] - 게스트 예약 생성/변경/취소
//! - [`reservations::ReservationHostService`] - 호스트 예약 완료/취소
//! - [`reviews::ReviewService`] - 리뷰 작성

pub mod reservations;
pub mod reviews;
pub mod rooms;
pub mod users;
