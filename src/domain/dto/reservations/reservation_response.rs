use chrono::NaiveDate;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::entities::reservations::{Reservation, ReservationStatus};

/// 리뷰 작성 가능 여부 판단에 필요한 예약 요약
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationReviewResponse {
    pub status: ReservationStatus,
    pub guest_id: ObjectId,
}

impl From<&Reservation> for ReservationReviewResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            status: reservation.reservation_status(),
            guest_id: *reservation.guest_id(),
        }
    }
}

/// 예약 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: String,
    pub room_id: String,
    pub guest_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_guest: u32,
    pub total_price: i64,
    pub reservation_status: ReservationStatus,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id().map(|id| id.to_hex()).unwrap_or_default(),
            room_id: reservation.room_id().to_hex(),
            guest_id: reservation.guest_id().to_hex(),
            check_in: reservation.reservation_date().check_in(),
            check_out: reservation.reservation_date().check_out(),
            total_guest: reservation.total_guest(),
            total_price: reservation.total_price().value(),
            reservation_status: reservation.reservation_status(),
        }
    }
}
