//! 리뷰 작성 서비스
//!
//! 리뷰는 숙박이 완료된 예약에, 예약한 게스트만, 예약당 한 번 작성할 수 있습니다.
//! 검사 순서는 예약 상태, 중복 리뷰, 작성자 순입니다.

use std::any::Any;
use std::sync::Arc;

use log::info;
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::{
    core::registry::ServiceRegistration,
    domain::{
        dto::reviews::CreateReviewRequest,
        entities::{reservations::ReservationStatus, reviews::Review},
        errors::DomainError,
        ports::ReviewStore,
    },
    errors::AppError,
    repositories::ReviewRepository,
    services::reservations::ReservationGuestService,
};

static REVIEW_SERVICE: OnceCell<Arc<ReviewService>> = OnceCell::new();

pub struct ReviewService {
    reservation_guest_service: Arc<ReservationGuestService>,
    review_store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(
        reservation_guest_service: Arc<ReservationGuestService>,
        review_store: Arc<dyn ReviewStore>,
    ) -> Self {
        Self { reservation_guest_service, review_store }
    }

    pub fn instance() -> Arc<Self> {
        REVIEW_SERVICE
            .get_or_init(|| {
                Arc::new(Self::new(
                    ReservationGuestService::instance(),
                    ReviewRepository::instance(),
                ))
            })
            .clone()
    }

    /// 리뷰를 작성하고 ID를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 예약이 존재하지 않음
    /// * `Domain(ReviewNotValidStatus)` - 예약이 `Completed` 상태가 아님
    /// * `Domain(AlreadyReview)` - 이미 리뷰가 작성된 예약
    /// * `Domain(ReviewNoPermission)` - 요청자가 예약한 게스트가 아님
    /// * `Domain(ReviewInvalidValue)` - 평점이나 내용이 범위를 벗어남
    pub async fn create_review(
        &self,
        user_id: &ObjectId,
        reservation_id: &ObjectId,
        request: CreateReviewRequest,
    ) -> Result<ObjectId, AppError> {
        let reservation = self.reservation_guest_service.find_by_id(reservation_id).await?;

        if reservation.status != ReservationStatus::Completed {
            return Err(DomainError::ReviewNotValidStatus.into());
        }

        if self.review_store.exists_by_reservation_id(reservation_id).await? {
            return Err(DomainError::AlreadyReview.into());
        }

        if *user_id != reservation.guest_id {
            return Err(DomainError::ReviewNoPermission.into());
        }

        let review = Review::new(request.content, request.score, *reservation_id)?;
        let saved = self.review_store.save(review).await?;

        let review_id = saved
            .id()
            .copied()
            .ok_or_else(|| AppError::InternalError("저장된 리뷰에 ID가 없습니다".to_string()))?;

        info!("리뷰 작성 완료: {} (reservation: {})", review_id, reservation_id);
        Ok(review_id)
    }
}

fn construct_review_service() -> Box<dyn Any + Send + Sync> {
    Box::new(ReviewService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "review",
        constructor: construct_review_service,
    }
}
