//! 게스트 예약 서비스
//!
//! 예약과 숙소, 게스트는 ID로만 연결되어 있으므로 검사에 필요한 엔티티는
//! 저장소에서 조회한 뒤 예약 엔티티의 판단 메서드에 넘깁니다.

use std::any::Any;
use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::{
    core::registry::ServiceRegistration,
    domain::{
        dto::reservations::{
            CreateReservationRequest, ModifyReservationRequest, ReservationResponse,
            ReservationReviewResponse,
        },
        entities::{
            reservations::{Reservation, ReservationDraft, ReservationStatus},
            rooms::Room,
            users::User,
        },
        errors::DomainError,
        ports::{ReservationStore, RoomStore, UserStore},
        vo::{Money, ReservationDate},
    },
    errors::AppError,
    repositories::{ReservationRepository, RoomRepository, UserRepository},
    utils::string_utils::parse_object_id,
};

static RESERVATION_GUEST_SERVICE: OnceCell<Arc<ReservationGuestService>> = OnceCell::new();

pub struct ReservationGuestService {
    user_store: Arc<dyn UserStore>,
    room_store: Arc<dyn RoomStore>,
    reservation_store: Arc<dyn ReservationStore>,
}

impl ReservationGuestService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        room_store: Arc<dyn RoomStore>,
        reservation_store: Arc<dyn ReservationStore>,
    ) -> Self {
        Self { user_store, room_store, reservation_store }
    }

    pub fn instance() -> Arc<Self> {
        RESERVATION_GUEST_SERVICE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    RoomRepository::instance(),
                    ReservationRepository::instance(),
                ))
            })
            .clone()
    }

    /// 리뷰 작성 검사에 필요한 예약 상태와 게스트 ID를 반환합니다.
    pub async fn find_by_id(&self, reservation_id: &ObjectId) -> Result<ReservationReviewResponse, AppError> {
        let reservation = self.find_reservation(reservation_id).await?;

        Ok(ReservationReviewResponse::from(&reservation))
    }

    /// 예약을 생성하고 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 게스트 또는 숙소가 존재하지 않음
    /// * `Domain(ReservationInvalidValue)` - 체크아웃이 체크인보다 빠르거나 같음, 인원 오류
    /// * `Domain(ReservationOverMaxGuest)` - 숙소 최대 인원 초과
    /// * `Domain(ReservationInvalidPrice)` - 총 가격이 숙소 가격 * 숙박 일수와 다름
    /// * `Domain(ReservationAlreadyExists)` - 같은 숙소에 기간이 겹치는 예약 존재
    pub async fn create_reservation(
        &self,
        user_id: &ObjectId,
        request: CreateReservationRequest,
    ) -> Result<ObjectId, AppError> {
        let room_id = parse_object_id(&request.room_id, "숙소 ID")?;
        let guest = self.find_user(user_id).await?;
        let room = self.find_room(&room_id).await?;

        let reservation = Reservation::new(ReservationDraft {
            id: None,
            reservation_date: Some(ReservationDate::new(request.check_in, request.check_out)?),
            total_guest: request.total_guest,
            total_price: Some(Money::new(request.total_price)?),
            reservation_status: Some(ReservationStatus::Pending),
            room_id: room.id().copied(),
            guest_id: guest.id().copied(),
        })?;

        Self::check_room_capacity(&reservation, &room)?;

        if self
            .reservation_store
            .exists_overlapping(&room_id, reservation.reservation_date(), None)
            .await?
        {
            return Err(DomainError::ReservationAlreadyExists.into());
        }

        let saved = self.reservation_store.save(reservation).await?;
        let reservation_id = saved
            .id()
            .copied()
            .ok_or_else(|| AppError::InternalError("저장된 예약에 ID가 없습니다".to_string()))?;

        info!("예약 생성 완료: {} (room: {}, guest: {})", reservation_id, room_id, user_id);
        Ok(reservation_id)
    }

    /// 체크아웃 날짜, 인원, 추가 결제 금액을 변경합니다. 예약한 게스트만 가능합니다.
    ///
    /// 변경 후에도 숙소 최대 인원과 가격 검사를 다시 통과해야 하고,
    /// 체크아웃이 바뀌면 자기 자신을 제외한 다른 예약과 기간이 겹치지 않아야 합니다.
    pub async fn modify_reservation(
        &self,
        user_id: &ObjectId,
        reservation_id: &ObjectId,
        request: ModifyReservationRequest,
    ) -> Result<ReservationResponse, AppError> {
        let mut reservation = self.find_reservation(reservation_id).await?;
        let user = self.find_user(user_id).await?;

        if reservation.is_not_guest(&user) {
            warn!("예약 변경 권한 없음: reservation {}, user {}", reservation_id, user_id);
            return Err(DomainError::ReservationNoPermission.into());
        }

        let previous_check_out = reservation.reservation_date().check_out();
        reservation.modify(
            request.check_out,
            request.total_guest,
            Money::new(request.payment)?,
        )?;

        let room = self.find_room(reservation.room_id()).await?;
        Self::check_room_capacity(&reservation, &room)?;

        if reservation.reservation_date().check_out() != previous_check_out
            && self
                .reservation_store
                .exists_overlapping(
                    reservation.room_id(),
                    reservation.reservation_date(),
                    Some(*reservation_id),
                )
                .await?
        {
            return Err(DomainError::ReservationAlreadyExists.into());
        }

        let saved = self.reservation_store.save(reservation).await?;

        info!("예약 변경 완료: {}", reservation_id);
        Ok(ReservationResponse::from(saved))
    }

    /// 게스트가 자신의 예약을 취소합니다. `Pending` 상태에서만 가능합니다.
    pub async fn cancel_reservation(
        &self,
        user_id: &ObjectId,
        reservation_id: &ObjectId,
    ) -> Result<(), AppError> {
        let mut reservation = self.find_reservation(reservation_id).await?;
        let user = self.find_user(user_id).await?;

        if reservation.is_not_guest(&user) {
            return Err(DomainError::ReservationNoPermission.into());
        }

        reservation.change_status(ReservationStatus::Canceled)?;
        self.reservation_store.save(reservation).await?;

        info!("게스트 예약 취소: {}", reservation_id);
        Ok(())
    }

    fn check_room_capacity(reservation: &Reservation, room: &Room) -> Result<(), AppError> {
        if reservation.is_over_max_guest(room) {
            return Err(DomainError::ReservationOverMaxGuest.into());
        }
        if reservation.is_not_valid_price(room) {
            return Err(DomainError::ReservationInvalidPrice.into());
        }
        Ok(())
    }

    async fn find_reservation(&self, reservation_id: &ObjectId) -> Result<Reservation, AppError> {
        self.reservation_store
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("예약을 찾을 수 없습니다: {}", reservation_id)))
    }

    async fn find_user(&self, user_id: &ObjectId) -> Result<User, AppError> {
        self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user_id)))
    }

    async fn find_room(&self, room_id: &ObjectId) -> Result<Room, AppError> {
        self.room_store
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("숙소를 찾을 수 없습니다: {}", room_id)))
    }
}

fn construct_reservation_guest_service() -> Box<dyn Any + Send + Sync> {
    Box::new(ReservationGuestService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "reservation_guest",
        constructor: construct_reservation_guest_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::reservations::reservation::fixtures::{date, reservation_draft};
    use crate::domain::entities::rooms::room::fixtures::room;
    use crate::domain::entities::users::UserRole;
    use crate::domain::entities::users::user::fixtures::user_with_id;
    use crate::domain::ports::{MockReservationStore, MockRoomStore, MockUserStore};

    struct Fixture {
        guest_id: ObjectId,
        room: Room,
        reservation: Reservation,
    }

    impl Fixture {
        /// 1박 20000원, 최대 1명인 숙소와 그 숙소의 3박 60000원 예약
        fn new() -> Self {
            let guest_id = ObjectId::new();
            let room = room(ObjectId::new());
            let room_id = *room.id().unwrap();
            let reservation = Reservation::new(reservation_draft(room_id, guest_id)).unwrap();
            Self { guest_id, room, reservation }
        }

        fn room_id(&self) -> ObjectId {
            *self.room.id().unwrap()
        }

        fn reservation_id(&self) -> ObjectId {
            *self.reservation.id().unwrap()
        }

        /// 요청한 ID를 가진 게스트를 돌려주는 저장소
        fn user_store(&self) -> MockUserStore {
            let mut user_store = MockUserStore::new();
            user_store
                .expect_find_by_id()
                .returning(|id| Ok(Some(user_with_id(*id, UserRole::Guest))));
            user_store
        }

        fn room_store(&self) -> MockRoomStore {
            let room = self.room.clone();
            let mut room_store = MockRoomStore::new();
            room_store
                .expect_find_by_id()
                .returning(move |_| Ok(Some(room.clone())));
            room_store
        }

        fn reservation_store(&self) -> MockReservationStore {
            let reservation = self.reservation.clone();
            let mut reservation_store = MockReservationStore::new();
            reservation_store
                .expect_find_by_id()
                .returning(move |_| Ok(Some(reservation.clone())));
            reservation_store
        }

        fn create_request(&self, total_price: i64) -> CreateReservationRequest {
            CreateReservationRequest {
                room_id: self.room_id().to_hex(),
                check_in: date(1),
                check_out: date(4),
                total_guest: 1,
                total_price,
            }
        }
    }

    fn service(
        user_store: MockUserStore,
        room_store: MockRoomStore,
        reservation_store: MockReservationStore,
    ) -> ReservationGuestService {
        ReservationGuestService::new(
            Arc::new(user_store),
            Arc::new(room_store),
            Arc::new(reservation_store),
        )
    }

    #[actix_web::test]
    async fn test_find_by_id_returns_status_and_guest() {
        let fixture = Fixture::new();
        let service = service(MockUserStore::new(), MockRoomStore::new(), fixture.reservation_store());

        let response = service.find_by_id(&fixture.reservation_id()).await.unwrap();

        assert_eq!(response.status, ReservationStatus::Pending);
        assert_eq!(response.guest_id, fixture.guest_id);
    }

    #[actix_web::test]
    async fn test_find_by_id_not_found() {
        let mut reservation_store = MockReservationStore::new();
        reservation_store.expect_find_by_id().returning(|_| Ok(None));
        let service = service(MockUserStore::new(), MockRoomStore::new(), reservation_store);

        assert!(matches!(
            service.find_by_id(&ObjectId::new()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_create_reservation() {
        let fixture = Fixture::new();
        let room_id = fixture.room_id();
        let guest_id = fixture.guest_id;
        let reservation_id = ObjectId::new();

        let mut reservation_store = MockReservationStore::new();
        reservation_store
            .expect_exists_overlapping()
            .withf(move |id, _, exclude_id| *id == room_id && exclude_id.is_none())
            .returning(|_, _, _| Ok(false));
        reservation_store
            .expect_save()
            .withf(move |reservation| {
                reservation.reservation_status() == ReservationStatus::Pending
                    && *reservation.guest_id() == guest_id
                    && *reservation.room_id() == room_id
            })
            .times(1)
            .returning(move |mut reservation| {
                reservation.assign_id(reservation_id);
                Ok(reservation)
            });

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let result = service
            .create_reservation(&guest_id, fixture.create_request(60_000))
            .await;

        assert_eq!(result.unwrap(), reservation_id);
    }

    #[actix_web::test]
    async fn test_create_reservation_with_invalid_price() {
        let fixture = Fixture::new();
        let mut reservation_store = MockReservationStore::new();
        reservation_store.expect_save().never();

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let result = service
            .create_reservation(&fixture.guest_id, fixture.create_request(50_000))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReservationInvalidPrice))
        ));
    }

    #[actix_web::test]
    async fn test_create_reservation_over_max_guest() {
        let fixture = Fixture::new();
        let mut request = fixture.create_request(60_000);
        request.total_guest = 2;

        let service = service(fixture.user_store(), fixture.room_store(), MockReservationStore::new());
        let result = service.create_reservation(&fixture.guest_id, request).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReservationOverMaxGuest))
        ));
    }

    #[actix_web::test]
    async fn test_create_reservation_overlapping() {
        let fixture = Fixture::new();
        let mut reservation_store = MockReservationStore::new();
        reservation_store.expect_exists_overlapping().returning(|_, _, _| Ok(true));
        reservation_store.expect_save().never();

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let result = service
            .create_reservation(&fixture.guest_id, fixture.create_request(60_000))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReservationAlreadyExists))
        ));
    }

    #[actix_web::test]
    async fn test_create_reservation_with_unknown_room() {
        let fixture = Fixture::new();
        let mut room_store = MockRoomStore::new();
        room_store.expect_find_by_id().returning(|_| Ok(None));

        let service = service(fixture.user_store(), room_store, MockReservationStore::new());
        let result = service
            .create_reservation(&fixture.guest_id, fixture.create_request(60_000))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_create_reservation_with_malformed_room_id() {
        let fixture = Fixture::new();
        let mut request = fixture.create_request(60_000);
        request.room_id = "room-1".to_string();

        let service = service(MockUserStore::new(), MockRoomStore::new(), MockReservationStore::new());

        assert!(matches!(
            service.create_reservation(&fixture.guest_id, request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_modify_reservation() {
        let fixture = Fixture::new();
        let reservation_id = fixture.reservation_id();
        let mut reservation_store = fixture.reservation_store();
        reservation_store
            .expect_exists_overlapping()
            .withf(move |_, reservation_date, exclude_id| {
                reservation_date.check_out() == date(5) && *exclude_id == Some(reservation_id)
            })
            .times(1)
            .returning(|_, _, _| Ok(false));
        reservation_store
            .expect_save()
            .times(1)
            .returning(Ok);

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let request = ModifyReservationRequest {
            check_out: date(5),
            total_guest: 1,
            payment: 20_000,
        };

        let response = service
            .modify_reservation(&fixture.guest_id, &fixture.reservation_id(), request)
            .await
            .unwrap();

        assert_eq!(response.check_out, date(5));
        assert_eq!(response.total_price, 80_000);
    }

    #[actix_web::test]
    async fn test_modify_reservation_into_booked_dates() {
        let fixture = Fixture::new();
        let mut reservation_store = fixture.reservation_store();
        reservation_store
            .expect_exists_overlapping()
            .returning(|_, _, _| Ok(true));
        reservation_store.expect_save().never();

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let request = ModifyReservationRequest {
            check_out: date(5),
            total_guest: 1,
            payment: 20_000,
        };

        let result = service
            .modify_reservation(&fixture.guest_id, &fixture.reservation_id(), request)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReservationAlreadyExists))
        ));
    }

    #[actix_web::test]
    async fn test_modify_reservation_by_other_user() {
        let fixture = Fixture::new();
        let mut reservation_store = fixture.reservation_store();
        reservation_store.expect_save().never();

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let request = ModifyReservationRequest {
            check_out: date(5),
            total_guest: 1,
            payment: 20_000,
        };

        let result = service
            .modify_reservation(&ObjectId::new(), &fixture.reservation_id(), request)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReservationNoPermission))
        ));
    }

    #[actix_web::test]
    async fn test_modify_reservation_without_enough_payment() {
        let fixture = Fixture::new();
        let mut reservation_store = fixture.reservation_store();
        reservation_store.expect_save().never();

        let service = service(fixture.user_store(), fixture.room_store(), reservation_store);
        let request = ModifyReservationRequest {
            check_out: date(5),
            total_guest: 1,
            payment: 0,
        };

        let result = service
            .modify_reservation(&fixture.guest_id, &fixture.reservation_id(), request)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::ReservationInvalidPrice))
        ));
    }

    #[actix_web::test]
    async fn test_modify_completed_reservation() {
        let mut fixture = Fixture::new();
        fixture.reservation.change_status(ReservationStatus::Completed).unwrap();

        let service = service(fixture.user_store(), MockRoomStore::new(), fixture.reservation_store());
        let request = ModifyReservationRequest {
            check_out: date(5),
            total_guest: 1,
            payment: 20_000,
        };

        let result = service
            .modify_reservation(&fixture.guest_id, &fixture.reservation_id(), request)
            .await;

        assert!(matches!(result, Err(AppError::Domain(DomainError::ReservationStatus))));
    }

    #[actix_web::test]
    async fn test_cancel_reservation() {
        let fixture = Fixture::new();
        let mut reservation_store = fixture.reservation_store();
        reservation_store
            .expect_save()
            .withf(|reservation| reservation.reservation_status() == ReservationStatus::Canceled)
            .times(1)
            .returning(Ok);

        let service = service(fixture.user_store(), MockRoomStore::new(), reservation_store);

        service
            .cancel_reservation(&fixture.guest_id, &fixture.reservation_id())
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_cancel_canceled_reservation() {
        let mut fixture = Fixture::new();
        fixture.reservation.change_status(ReservationStatus::Canceled).unwrap();

        let service = service(fixture.user_store(), MockRoomStore::new(), fixture.reservation_store());
        let result = service
            .cancel_reservation(&fixture.guest_id, &fixture.reservation_id())
            .await;

        assert!(matches!(result, Err(AppError::Domain(DomainError::ReservationStatus))));
    }
}
