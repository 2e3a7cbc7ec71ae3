//! 예약 상태와 상태 전이 표

use serde::{Deserialize, Serialize};

/// 예약 상태
///
/// `Pending`에서만 다른 상태로 전이할 수 있고, `Completed`와 `Canceled`는 종료 상태입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Completed,
    Canceled,
}

impl ReservationStatus {
    /// 허용되는 (현재 상태, 다음 상태) 쌍
    const TRANSITIONS: &'static [(ReservationStatus, ReservationStatus)] = &[
        (ReservationStatus::Pending, ReservationStatus::Completed),
        (ReservationStatus::Pending, ReservationStatus::Canceled),
    ];

    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        Self::TRANSITIONS.contains(&(self, next))
    }

    /// 예약 내용(날짜, 인원, 금액)을 변경할 수 있는 상태인지
    pub fn is_modifiable(self) -> bool {
        self == ReservationStatus::Pending
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Completed => "COMPLETED",
            ReservationStatus::Canceled => "CANCELED",
        }
    }
}
