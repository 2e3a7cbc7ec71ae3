//! 금액 값 객체

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// 음수가 될 수 없는 정수 금액 (원 단위)
///
/// MongoDB와 JSON에는 정수 하나로 저장되며, 역직렬화 시에도 음수 검사를 거칩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// 새 금액을 생성합니다. 음수는 `MoneyInvalidValue`로 거부됩니다.
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::MoneyInvalidValue(format!(
                "금액은 음수일 수 없습니다. 현재 금액 : {}",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// 숙박 일수만큼 곱한 금액
    pub fn multiply(&self, period: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(period)))
    }
}

impl TryFrom<i64> for Money {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for i64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
