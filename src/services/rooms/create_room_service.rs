//! 숙소 등록과 호스트별 숙소 조회

use std::any::Any;
use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::{
    core::registry::ServiceRegistration,
    domain::{
        dto::rooms::{CreateRoomRequest, RoomResponse},
        entities::users::UserRole,
        ports::{RoomStore, UserStore},
    },
    errors::AppError,
    repositories::{RoomRepository, UserRepository},
};

static CREATE_ROOM_SERVICE: OnceCell<Arc<CreateRoomService>> = OnceCell::new();

pub struct CreateRoomService {
    user_store: Arc<dyn UserStore>,
    room_store: Arc<dyn RoomStore>,
}

impl CreateRoomService {
    pub fn new(user_store: Arc<dyn UserStore>, room_store: Arc<dyn RoomStore>) -> Self {
        Self { user_store, room_store }
    }

    pub fn instance() -> Arc<Self> {
        CREATE_ROOM_SERVICE
            .get_or_init(|| {
                Arc::new(Self::new(UserRepository::instance(), RoomRepository::instance()))
            })
            .clone()
    }

    /// 숙소를 등록하고 ID를 반환합니다.
    ///
    /// 요청값은 `CreateRoomRequest::to_room`에서 값 객체로 감싸지며
    /// 숙소 생성 시의 모든 검증을 거칩니다.
    ///
    /// # Errors
    ///
    /// * `NotFound` - 호스트가 존재하지 않음
    /// * `AuthorizationError` - 호출자가 `HOST` 역할이 아님
    /// * `Domain(RoomInvalidValue)` - 숙소 입력값 오류
    pub async fn create_room(
        &self,
        host_id: &ObjectId,
        request: CreateRoomRequest,
    ) -> Result<ObjectId, AppError> {
        let host = self.user_store
            .find_by_id(host_id)
            .await?
            .ok_or_else(|| AppError::NotFound("호스트를 찾을 수 없습니다".to_string()))?;

        if host.user_role() != UserRole::Host {
            warn!("호스트가 아닌 사용자의 숙소 등록 시도: {}", host_id);
            return Err(AppError::AuthorizationError("호스트만 숙소를 등록할 수 있습니다".to_string()));
        }

        let room = request.to_room(*host_id)?;
        let saved = self.room_store.save(room).await?;

        let room_id = saved
            .id()
            .copied()
            .ok_or_else(|| AppError::InternalError("저장된 숙소에 ID가 없습니다".to_string()))?;

        info!("숙소 등록 완료: {} (host: {})", room_id, host_id);
        Ok(room_id)
    }

    pub async fn find_rooms_by_host(&self, host_id: &ObjectId) -> Result<Vec<RoomResponse>, AppError> {
        let rooms = self.room_store.find_by_host_id(host_id).await?;

        Ok(rooms.into_iter().map(RoomResponse::from).collect())
    }
}

fn construct_create_room_service() -> Box<dyn Any + Send + Sync> {
    Box::new(CreateRoomService::instance())
}

inventory::submit! {
    ServiceRegistration {
        name: "create_room",
        constructor: construct_create_room_service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::rooms::create_room_request::fixtures::create_room_request;
    use crate::domain::entities::rooms::room::fixtures::room;
    use crate::domain::entities::users::UserRole;
    use crate::domain::entities::users::user::fixtures::user_with_id;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::{MockRoomStore, MockUserStore};

    fn host_store(host_id: ObjectId) -> MockUserStore {
        let mut user_store = MockUserStore::new();
        user_store
            .expect_find_by_id()
            .withf(move |id| *id == host_id)
            .returning(move |_| Ok(Some(user_with_id(host_id, UserRole::Host))));
        user_store
    }

    #[actix_web::test]
    async fn test_create_room() {
        let host_id = ObjectId::new();
        let room_id = ObjectId::new();

        let mut room_store = MockRoomStore::new();
        room_store
            .expect_save()
            .withf(move |room| {
                *room.host_id() == host_id && room.room_images().len() == 2 && room.id().is_none()
            })
            .times(1)
            .returning(move |mut room| {
                room.assign_id(room_id);
                Ok(room)
            });

        let service = CreateRoomService::new(Arc::new(host_store(host_id)), Arc::new(room_store));

        assert_eq!(service.create_room(&host_id, create_room_request()).await.unwrap(), room_id);
    }

    #[actix_web::test]
    async fn test_create_room_without_host() {
        let mut user_store = MockUserStore::new();
        user_store.expect_find_by_id().returning(|_| Ok(None));
        let mut room_store = MockRoomStore::new();
        room_store.expect_save().never();

        let service = CreateRoomService::new(Arc::new(user_store), Arc::new(room_store));
        let result = service.create_room(&ObjectId::new(), create_room_request()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_create_room_by_guest() {
        let guest_id = ObjectId::new();
        let mut user_store = MockUserStore::new();
        user_store
            .expect_find_by_id()
            .returning(move |_| Ok(Some(user_with_id(guest_id, UserRole::Guest))));
        let mut room_store = MockRoomStore::new();
        room_store.expect_save().never();

        let service = CreateRoomService::new(Arc::new(user_store), Arc::new(room_store));
        let result = service.create_room(&guest_id, create_room_request()).await;

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
    }

    #[actix_web::test]
    async fn test_create_room_with_invalid_max_guest() {
        let host_id = ObjectId::new();
        let mut room_store = MockRoomStore::new();
        room_store.expect_save().never();

        let service = CreateRoomService::new(Arc::new(host_store(host_id)), Arc::new(room_store));
        let mut request = create_room_request();
        request.max_guest_num = 0;

        assert!(matches!(
            service.create_room(&host_id, request).await,
            Err(AppError::Domain(DomainError::RoomInvalidValue(_)))
        ));
    }

    #[actix_web::test]
    async fn test_find_rooms_by_host() {
        let host_id = ObjectId::new();
        let mut room_store = MockRoomStore::new();
        room_store
            .expect_find_by_host_id()
            .withf(move |id| *id == host_id)
            .returning(move |_| Ok(vec![room(host_id), room(host_id)]));

        let service = CreateRoomService::new(Arc::new(MockUserStore::new()), Arc::new(room_store));
        let rooms = service.find_rooms_by_host(&host_id).await.unwrap();

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].host_id, host_id.to_hex());
    }
}
