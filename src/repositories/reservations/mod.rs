//! # 예약 리포지토리

pub mod reservation_repo;

pub use reservation_repo::ReservationRepository;
