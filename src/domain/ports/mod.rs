//! 영속성 포트
//!
//! 도메인 서비스가 엔티티를 조회하고 저장할 때 사용하는 trait들입니다.
//! MongoDB 리포지토리([`crate::repositories`])가 구현하며, 테스트에서는
//! `mockall`이 생성한 목 객체로 대체됩니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::entities::reservations::Reservation;
use crate::domain::entities::reviews::Review;
use crate::domain::entities::rooms::Room;
use crate::domain::entities::users::User;
use crate::domain::vo::ReservationDate;
use crate::errors::AppResult;

/// 사용자 저장소
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 저장 후 ID가 부여된 사용자를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;
}

/// 숙소 저장소
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// ID가 없으면 새로 저장하고, 있으면 문서를 교체합니다.
    async fn save(&self, room: Room) -> AppResult<Room>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Room>>;

    async fn find_by_host_id(&self, host_id: &ObjectId) -> AppResult<Vec<Room>>;
}

/// 예약 저장소
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// ID가 없으면 새로 저장하고, 있으면 문서를 교체합니다.
    async fn save(&self, reservation: Reservation) -> AppResult<Reservation>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Reservation>>;

    /// 같은 숙소에 기간이 겹치는, 취소되지 않은 예약이 있는지 확인합니다.
    ///
    /// `exclude_id`로 넘긴 예약은 검사 대상에서 제외합니다. (예약 변경 시 자기 자신)
    async fn exists_overlapping(
        &self,
        room_id: &ObjectId,
        reservation_date: &ReservationDate,
        exclude_id: Option<ObjectId>,
    ) -> AppResult<bool>;
}

/// 리뷰 저장소
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStore: Send + Sync {
    async fn save(&self, review: Review) -> AppResult<Review>;

    async fn exists_by_reservation_id(&self, reservation_id: &ObjectId) -> AppResult<bool>;
}
