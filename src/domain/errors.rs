//! 도메인 규칙 위반 에러
//!
//! 값 객체와 엔티티, 도메인 서비스가 불변식 검사에 실패했을 때 반환하는 에러입니다.
//! HTTP 계층에 대한 의존이 없으며, [`AppError`](crate::errors::AppError)로 감싸져
//! API 경계에서 상태 코드로 변환됩니다.

use thiserror::Error;

/// 도메인 계층 에러
///
/// 모든 variant는 복구 불가능한 검증 실패입니다. 재시도하지 않고 호출자에게 그대로 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 사용자 입력값 오류 (이름, 이메일, 휴대폰 번호)
    #[error("{0}")]
    UserInvalidValue(String),

    /// 숙소 입력값 오류
    #[error("{0}")]
    RoomInvalidValue(String),

    /// 예약 입력값 오류
    #[error("{0}")]
    ReservationInvalidValue(String),

    /// 리뷰 입력값 오류 (내용, 평점)
    #[error("{0}")]
    ReviewInvalidValue(String),

    /// 금액 입력값 오류
    #[error("{0}")]
    MoneyInvalidValue(String),

    /// PENDING 상태가 아닌 예약을 변경하려고 할 때
    #[error("예약 상태를 변경할 수 없습니다")]
    ReservationStatus,

    /// 예약의 게스트나 숙소의 호스트가 아닌 사용자가 예약에 접근할 때
    #[error("예약에 대한 권한이 없습니다")]
    ReservationNoPermission,

    /// 숙박 인원이 숙소 최대 인원을 넘을 때
    #[error("숙소 최대 인원을 초과했습니다")]
    ReservationOverMaxGuest,

    /// 총 가격이 숙소 가격 * 숙박 일수와 다를 때
    #[error("예약 가격이 올바르지 않습니다")]
    ReservationInvalidPrice,

    /// 같은 숙소에 날짜가 겹치는 예약이 이미 있을 때
    #[error("해당 날짜에 이미 예약이 존재합니다")]
    ReservationAlreadyExists,

    /// 하나의 예약에 두 번째 리뷰를 작성하려고 할 때
    #[error("이미 리뷰를 작성한 예약입니다")]
    AlreadyReview,

    /// 숙박이 완료되지 않은 예약에 리뷰를 작성하려고 할 때
    #[error("숙박이 완료된 예약에만 리뷰를 작성할 수 있습니다")]
    ReviewNotValidStatus,

    /// 예약의 게스트가 아닌 사용자가 리뷰를 작성하려고 할 때
    #[error("리뷰 작성 권한이 없습니다")]
    ReviewNoPermission,
}

/// 도메인 연산 결과 타입
pub type DomainResult<T> = Result<T, DomainError>;
