//! 리뷰 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 리뷰 작성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 1000, message = "리뷰 내용은 1-1000자 사이여야 합니다"))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "평점은 1-5 사이여야 합니다"))]
    pub score: u8,
}
