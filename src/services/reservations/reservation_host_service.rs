//! 호스트 예약 서비스

use std::any::Any;
use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::{
    core::registry::ServiceRegistration,
    domain::{
        entities::reservations::ReservationStatus,
        errors::DomainError,
        ports::{ReservationStore, RoomStore, UserStore},
    },
    errors::AppError,
    repositories::{ReservationRepository, RoomRepository, UserRepository},
};

static RESERVATION_HOST_SERVICE: OnceCell<Arc<ReservationHostService>> = OnceCell::new();

/// 숙소 호스트가 자기 숙소의 예약 상태를 바꾸는 서비스
pub struct ReservationHostService {
    user_store: Arc<dyn UserStore>,
    room_store: Arc<dyn RoomStore>,
    reservation_store: Arc<dyn ReservationStore>,
}

impl ReservationHostService {
    pub fn new(
        user_store: Arc<dyn UserStore>,
        room_store: Arc<dyn RoomStore>,
        reservation_store: Arc<dyn ReservationStore>,
    ) -> Self {
        Self { user_store, room_store, reservation_store }
    }

    pub fn instance() -> Arc<Self> {
        RESERVATION_HOST_SERVICE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    RoomRepository::instance(),
                    ReservationRepository::instance(),
                ))
            })
            .clone()
    }

    /// 숙박 완료 처리. 이후 게스트가 리뷰를 작성할 수 있습니다.
    pub async fn complete_reservation(
        &self,
        user_id: &ObjectId,
        reservation_id: &ObjectId,
    ) -> Result<(), AppError> {
        self.change_status(user_id, reservation_id, ReservationStatus::Completed).await
    }

    pub async fn cancel_reservation(
        &self,
        user_id: &ObjectId,
        reservation_id: &ObjectId,
    ) -> Result<(), AppError> {
        self.change_status(user_id, reservation_id, ReservationStatus::Canceled).await
    }

    async fn change_status(
        &self,
        user_id: &ObjectId,
        reservation_id: &ObjectId,
        status: ReservationStatus,
    ) -> Result<(), AppError> {
        let mut reservation = self
            .reservation_store
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("예약을 찾을 수 없습니다: {}", reservation_id)))?;

        let room = self
            .room_store
            .find_by_id(reservation.room_id())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("숙소를 찾을 수 없습니다: {}", reservation.room_id())))?;

        let user = self
            .user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", user_id)))?;

        if reservation.is_not_host(&room, &user) {
            warn!("예약 상태 변경 권한 없음: reservation {}, user {}", reservation_id, user_id);
            return Err(DomainError::ReservationNoPermission.into());
        }

        reservation.change_status(status)?;
        self.reservation_store.save(reservation).await?;

        info!("호스트 예약 상태 변경: {} → {}", reservation_id, status.as_str());
        Ok(())
    }
}

fn construct_reservation_host_service() -> Box<dyn Any + Send + Sync> {
    Box::new(ReservationHostService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "reservation_host",
        constructor: construct_reservation_host_service,
    }
}
