//! 숙소 이미지

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 숙소에 속한 이미지 경로
///
/// 항상 하나의 [`Room`](super::Room) 문서 안에 포함되어 저장되므로 숙소가 삭제되면 함께 삭제됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    image_path: String,
}

impl RoomImage {
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            image_path: image_path.into(),
        }
    }

    pub fn with_id(id: ObjectId, image_path: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            image_path: image_path.into(),
        }
    }

    pub fn id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }
}
