//! 예약 DTO

pub mod reservation_request;
pub mod reservation_response;

pub use reservation_request::{CreateReservationRequest, ModifyReservationRequest};
pub use reservation_response::{ReservationResponse, ReservationReviewResponse};
