//! 예약 날짜 값 객체

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// 체크인/체크아웃 날짜 쌍
///
/// 체크아웃은 항상 체크인 이후입니다. MongoDB에는 `YYYY-MM-DD` 문자열로 저장되므로
/// 문자열 비교로 기간 겹침을 조회할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationDate {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl ReservationDate {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::ReservationInvalidValue(format!(
                "체크아웃 날짜는 체크인 날짜 이후여야 합니다. 체크인 : {}, 체크아웃 : {}",
                check_in, check_out
            )));
        }
        Ok(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// 숙박 일수 (박)
    pub fn period(&self) -> u32 {
        let nights = (self.check_out - self.check_in).num_days();
        u32::try_from(nights).unwrap_or(u32::MAX)
    }

    pub fn change_check_out(&self, check_out: NaiveDate) -> DomainResult<Self> {
        Self::new(self.check_in, check_out)
    }

    /// 두 기간이 하루라도 겹치는지 확인합니다. 체크아웃 당일 체크인은 겹치지 않습니다.
    pub fn overlaps(&self, other: &ReservationDate) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}
