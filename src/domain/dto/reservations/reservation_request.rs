use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 예약 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub room_id: String,

    pub check_in: NaiveDate,

    pub check_out: NaiveDate,

    #[validate(range(min = 1, message = "숙박 인원은 1명 이상이어야 합니다"))]
    pub total_guest: i32,

    #[validate(range(min = 0, message = "총 가격은 0원 이상이어야 합니다"))]
    pub total_price: i64,
}

/// 예약 변경 요청 DTO
///
/// `payment`는 기존 총 가격에 더해지는 추가 결제 금액입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ModifyReservationRequest {
    pub check_out: NaiveDate,

    #[validate(range(min = 1, message = "숙박 인원은 1명 이상이어야 합니다"))]
    pub total_guest: i32,

    #[validate(range(min = 0, message = "추가 결제 금액은 0원 이상이어야 합니다"))]
    pub payment: i64,
}
