//! # 리뷰 리포지토리 구현

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use singleton_macro::repository;

use crate::{
    core::registry::Repository,
    db::Database,
    domain::{entities::reviews::Review, errors::DomainError, ports::ReviewStore},
};
use crate::errors::errors::AppError;
use crate::repositories::{inserted_object_id, is_duplicate_key};

/// 리뷰 데이터 액세스 리포지토리
///
/// `reservation_id` unique 인덱스로 예약당 리뷰 하나를 보장합니다.
/// 동시에 두 요청이 중복 검사를 통과해도 두 번째 저장은
/// [`DomainError::AlreadyReview`]로 실패합니다.
#[repository(name = "review", collection = "reviews")]
pub struct ReviewRepository {
    db: Arc<Database>,
}

impl ReviewRepository {
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let reservation_index = IndexModel::builder()
            .keys(doc! { "reservation_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("reservation_id_unique".to_string())
                .build())
            .build();

        self.collection::<Review>()
            .create_index(reservation_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn save(&self, mut review: Review) -> Result<Review, AppError> {
        let result = self.collection::<Review>()
            .insert_one(&review)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::from(DomainError::AlreadyReview)
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        review.assign_id(inserted_object_id(result.inserted_id)?);
        Ok(review)
    }

    async fn exists_by_reservation_id(&self, reservation_id: &ObjectId) -> Result<bool, AppError> {
        let count = self.collection::<Review>()
            .count_documents(doc! { "reservation_id": *reservation_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}
