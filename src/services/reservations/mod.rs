//! # 예약 서비스
//!
//! - [`ReservationGuestService`] - 게스트의 예약 생성, 변경, 취소 및 예약 요약 조회
//! - [`ReservationHostService`] - 호스트의 예약 완료, 취소

pub mod reservation_guest_service;
pub mod reservation_host_service;

pub use reservation_guest_service::ReservationGuestService;
pub use reservation_host_service::ReservationHostService;
