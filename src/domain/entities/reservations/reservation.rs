//! Reservation Entity Implementation
//!
//! 게스트의 숙소 예약입니다. 숙소와 게스트는 ID로만 참조하며,
//! 숙소가 필요한 검사는 서비스가 조회한 [`Room`]을 인자로 받습니다.

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use super::reservation_status::ReservationStatus;
use crate::domain::entities::rooms::Room;
use crate::domain::entities::users::User;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::vo::{Money, ReservationDate};

const GUEST_MIN_VALUE: i32 = 1;

/// 예약 생성 입력값
#[derive(Debug, Clone)]
pub struct ReservationDraft {
    pub id: Option<ObjectId>,
    pub reservation_date: Option<ReservationDate>,
    pub total_guest: i32,
    pub total_price: Option<Money>,
    pub reservation_status: Option<ReservationStatus>,
    pub room_id: Option<ObjectId>,
    pub guest_id: Option<ObjectId>,
}

/// 예약 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    reservation_date: ReservationDate,
    total_guest: u32,
    total_price: Money,
    reservation_status: ReservationStatus,
    room_id: ObjectId,
    guest_id: ObjectId,
    created_at: DateTime,
    updated_at: DateTime,
}

impl Reservation {
    pub fn new(draft: ReservationDraft) -> DomainResult<Self> {
        let reservation_date = Self::require(draft.reservation_date, "예약 날짜는 비어있을 수 없습니다.")?;
        let total_guest = Self::validate_total_guest(draft.total_guest)?;
        let total_price = Self::require(draft.total_price, "총 가격은 비어있을 수 없습니다.")?;
        let room_id = Self::require(draft.room_id, "숙소는 비어있을 수 없습니다.")?;
        let guest_id = Self::require(draft.guest_id, "게스트는 비어있을 수 없습니다.")?;
        let reservation_status =
            Self::require(draft.reservation_status, "예약 상태는 비어있을 수 없습니다.")?;

        let now = DateTime::now();
        Ok(Self {
            id: draft.id,
            reservation_date,
            total_guest,
            total_price,
            reservation_status,
            room_id,
            guest_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// 체크아웃 날짜, 인원, 추가 결제 금액을 반영합니다. `Pending` 상태에서만 가능합니다.
    pub fn modify(
        &mut self,
        check_out: NaiveDate,
        total_guest: i32,
        additional_payment: Money,
    ) -> DomainResult<()> {
        if !self.reservation_status.is_modifiable() {
            return Err(DomainError::ReservationStatus);
        }

        let reservation_date = self.reservation_date.change_check_out(check_out)?;
        let total_guest = Self::validate_total_guest(total_guest)?;

        self.reservation_date = reservation_date;
        self.total_guest = total_guest;
        self.total_price = self.total_price.add(additional_payment);
        self.touch();
        Ok(())
    }

    pub fn change_status(&mut self, status: ReservationStatus) -> DomainResult<()> {
        if !self.reservation_status.can_transition_to(status) {
            return Err(DomainError::ReservationStatus);
        }
        self.reservation_status = status;
        self.touch();
        Ok(())
    }

    /// `room`은 이 예약의 `room_id`로 조회한 숙소여야 합니다.
    pub fn is_not_host(&self, room: &Room, user: &User) -> bool {
        !room.is_host(user)
    }

    pub fn is_not_guest(&self, user: &User) -> bool {
        !user.has_id(&self.guest_id)
    }

    pub fn is_not_valid_price(&self, room: &Room) -> bool {
        !room.is_valid_price(self.total_price, self.reservation_date.period())
    }

    pub fn is_over_max_guest(&self, room: &Room) -> bool {
        room.is_over_max_guest_num(self.total_guest)
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn reservation_date(&self) -> &ReservationDate {
        &self.reservation_date
    }

    pub fn total_guest(&self) -> u32 {
        self.total_guest
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }

    pub fn reservation_status(&self) -> ReservationStatus {
        self.reservation_status
    }

    pub fn room_id(&self) -> &ObjectId {
        &self.room_id
    }

    pub fn guest_id(&self) -> &ObjectId {
        &self.guest_id
    }

    fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }

    fn validate_total_guest(total_guest: i32) -> DomainResult<u32> {
        if total_guest < GUEST_MIN_VALUE {
            return Err(DomainError::ReservationInvalidValue(
                "숙박 인원는 1미만일 수 없습니다.".to_string(),
            ));
        }
        u32::try_from(total_guest).map_err(|_| {
            DomainError::ReservationInvalidValue("숙박 인원는 1미만일 수 없습니다.".to_string())
        })
    }

    fn require<T>(value: Option<T>, message: &str) -> DomainResult<T> {
        value.ok_or_else(|| DomainError::ReservationInvalidValue(message.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::entities::rooms::room::fixtures::room;
    use crate::domain::entities::users::user::fixtures::user_with_id;
    use crate::domain::entities::users::UserRole;

    fn assert_reservation_invalid(draft: ReservationDraft) {
        assert!(matches!(
            Reservation::new(draft),
            Err(DomainError::ReservationInvalidValue(_))
        ));
    }

    #[test]
    fn test_create_reservation() {
        let room_id = ObjectId::new();
        let guest_id = ObjectId::new();

        let reservation = Reservation::new(reservation_draft(room_id, guest_id)).unwrap();

        assert_eq!(reservation.reservation_date().check_in(), date(1));
        assert_eq!(reservation.reservation_date().check_out(), date(4));
        assert_eq!(reservation.total_guest(), 1);
        assert_eq!(reservation.total_price(), Money::new(60_000).unwrap());
        assert_eq!(reservation.reservation_status(), ReservationStatus::Pending);
        assert_eq!(reservation.room_id(), &room_id);
        assert_eq!(reservation.guest_id(), &guest_id);
    }

    #[test]
    fn test_required_fields_must_be_present() {
        let draft = || reservation_draft(ObjectId::new(), ObjectId::new());

        assert_reservation_invalid(ReservationDraft { reservation_date: None, ..draft() });
        assert_reservation_invalid(ReservationDraft { total_price: None, ..draft() });
        assert_reservation_invalid(ReservationDraft { room_id: None, ..draft() });
        assert_reservation_invalid(ReservationDraft { guest_id: None, ..draft() });
        assert_reservation_invalid(ReservationDraft { reservation_status: None, ..draft() });
        assert_reservation_invalid(ReservationDraft { total_guest: 0, ..draft() });
    }

    #[test]
    fn test_modify_pending_reservation() {
        let mut reservation = reservation_with_status(ReservationStatus::Pending);

        reservation
            .modify(date(6), 2, Money::new(40_000).unwrap())
            .unwrap();

        assert_eq!(reservation.reservation_date().check_out(), date(6));
        assert_eq!(reservation.reservation_date().period(), 5);
        assert_eq!(reservation.total_guest(), 2);
        assert_eq!(reservation.total_price(), Money::new(100_000).unwrap());
    }

    #[test]
    fn test_modify_rejects_invalid_values_without_changes() {
        let mut reservation = reservation_with_status(ReservationStatus::Pending);

        assert!(reservation.modify(date(1), 2, Money::ZERO).is_err());
        assert!(reservation.modify(date(6), 0, Money::ZERO).is_err());

        assert_eq!(reservation.reservation_date().check_out(), date(4));
        assert_eq!(reservation.total_guest(), 1);
    }

    #[test]
    fn test_terminal_reservation_rejects_modify_and_change_status() {
        for status in [ReservationStatus::Completed, ReservationStatus::Canceled] {
            let mut reservation = reservation_with_status(status);

            assert_eq!(
                reservation.modify(date(6), 1, Money::ZERO),
                Err(DomainError::ReservationStatus)
            );
            assert_eq!(
                reservation.change_status(ReservationStatus::Pending),
                Err(DomainError::ReservationStatus)
            );
            assert_eq!(
                reservation.change_status(ReservationStatus::Canceled),
                Err(DomainError::ReservationStatus)
            );
            assert_eq!(reservation.reservation_status(), status);
        }
    }

    #[test]
    fn test_change_status_from_pending() {
        let mut reservation = reservation_with_status(ReservationStatus::Pending);

        reservation.change_status(ReservationStatus::Completed).unwrap();

        assert_eq!(reservation.reservation_status(), ReservationStatus::Completed);
    }

    #[test]
    fn test_room_predicates() {
        let host_id = ObjectId::new();
        let guest_id = ObjectId::new();
        let room = room(host_id);
        let room_id = *room.id().unwrap();

        let reservation = Reservation::new(reservation_draft(room_id, guest_id)).unwrap();
        assert!(!reservation.is_not_valid_price(&room));
        assert!(!reservation.is_over_max_guest(&room));
        assert!(!reservation.is_not_host(&room, &user_with_id(host_id, UserRole::Host)));
        assert!(reservation.is_not_host(&room, &user_with_id(guest_id, UserRole::Guest)));
        assert!(!reservation.is_not_guest(&user_with_id(guest_id, UserRole::Guest)));
        assert!(reservation.is_not_guest(&user_with_id(host_id, UserRole::Host)));

        let mut draft = reservation_draft(room_id, guest_id);
        draft.total_guest = 2;
        draft.total_price = Some(Money::new(60_001).unwrap());
        let reservation = Reservation::new(draft).unwrap();
        assert!(reservation.is_not_valid_price(&room));
        assert!(reservation.is_over_max_guest(&room));
    }
}
