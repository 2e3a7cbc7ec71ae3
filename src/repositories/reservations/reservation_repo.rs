//! # 예약 리포지토리 구현
//!
//! 예약은 상태가 자주 바뀌므로 캐시하지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    core::registry::Repository,
    db::Database,
    domain::{
        entities::reservations::{Reservation, ReservationStatus},
        ports::ReservationStore,
        vo::ReservationDate,
    },
};
use crate::errors::errors::AppError;
use crate::repositories::inserted_object_id;

/// 예약 데이터 액세스 리포지토리
///
/// - **인덱스**: `room_id` + `reservation_date.check_in` (기간 겹침 조회용)
#[repository(name = "reservation", collection = "reservations")]
pub struct ReservationRepository {
    db: Arc<Database>,
}

impl ReservationRepository {
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let room_date_index = IndexModel::builder()
            .keys(doc! { "room_id": 1, "reservation_date.check_in": 1 })
            .options(IndexOptions::builder()
                .name("room_id_check_in".to_string())
                .build())
            .build();

        let guest_index = IndexModel::builder()
            .keys(doc! { "guest_id": 1 })
            .options(IndexOptions::builder()
                .name("guest_id".to_string())
                .build())
            .build();

        self.collection::<Reservation>()
            .create_indexes([room_date_index, guest_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 같은 숙소에서 `[check_in, check_out)` 기간이 겹치는, 취소되지 않은 예약 조건
    ///
    /// 날짜는 `YYYY-MM-DD` 문자열이므로 문자열 비교가 날짜 비교와 같습니다.
    fn overlapping_filter(
        room_id: &ObjectId,
        reservation_date: &ReservationDate,
        exclude_id: Option<ObjectId>,
    ) -> Document {
        let mut filter = doc! {
            "room_id": *room_id,
            "reservation_status": { "$ne": ReservationStatus::Canceled.as_str() },
            "reservation_date.check_in": { "$lt": reservation_date.check_out().to_string() },
            "reservation_date.check_out": { "$gt": reservation_date.check_in().to_string() },
        };

        if let Some(id) = exclude_id {
            filter.insert("_id", doc! { "$ne": id });
        }

        filter
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn save(&self, mut reservation: Reservation) -> Result<Reservation, AppError> {
        match reservation.id().copied() {
            Some(id) => {
                self.collection::<Reservation>()
                    .replace_one(doc! { "_id": id }, &reservation)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            }
            None => {
                let result = self.collection::<Reservation>()
                    .insert_one(&reservation)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                reservation.assign_id(inserted_object_id(result.inserted_id)?);
            }
        }

        Ok(reservation)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Reservation>, AppError> {
        self.collection::<Reservation>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_overlapping(
        &self,
        room_id: &ObjectId,
        reservation_date: &ReservationDate,
        exclude_id: Option<ObjectId>,
    ) -> Result<bool, AppError> {
        let count = self.collection::<Reservation>()
            .count_documents(Self::overlapping_filter(room_id, reservation_date, exclude_id))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}
