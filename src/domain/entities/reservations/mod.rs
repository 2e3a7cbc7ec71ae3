//! Reservations Entity Module

pub mod reservation;
pub mod reservation_status;

pub use reservation::{Reservation, ReservationDraft};
pub use reservation_status::ReservationStatus;
