//! Review Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;
const MAX_CONTENT_LENGTH: usize = 1000;

/// 완료된 예약에 대한 게스트 리뷰
///
/// 예약 하나당 리뷰 하나, 작성자는 예약의 게스트, 예약 상태는 `Completed`라는 규칙은
/// [`ReviewService`](crate::services::reviews::review_service::ReviewService)가 검사하며,
/// `reviews` 컬렉션의 `reservation_id` unique 인덱스가 마지막으로 보장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    content: String,
    score: u8,
    reservation_id: ObjectId,
    created_at: DateTime,
}

impl Review {
    /// 평점은 1-5, 내용은 공백이 아닌 1000자 이하여야 합니다.
    pub fn new(content: String, score: u8, reservation_id: ObjectId) -> DomainResult<Self> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(DomainError::ReviewInvalidValue(format!(
                "평점은 {}-{} 사이여야 합니다: {}",
                MIN_SCORE, MAX_SCORE, score
            )));
        }

        let content = content.trim().to_string();
        if content.is_empty() || content.chars().count() > MAX_CONTENT_LENGTH {
            return Err(DomainError::ReviewInvalidValue(
                "리뷰 내용은 1-1000자 사이여야 합니다".to_string(),
            ));
        }

        Ok(Self {
            id: None,
            content,
            score,
            reservation_id,
            created_at: DateTime::now(),
        })
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    pub(crate) fn assign_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn reservation_id(&self) -> &ObjectId {
        &self.reservation_id
    }
}
