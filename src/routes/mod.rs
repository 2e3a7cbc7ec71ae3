//! API 라우트 설정 모듈
//!
//! 기능별 스코프로 엔드포인트를 묶습니다. 호출자 식별이 필요한 핸들러는
//! [`CurrentUser`](crate::middlewares::CurrentUser) 추출기를 인자로 받습니다.
//!
//! ```text
//! GET    /health
//! POST   /api/v1/users
//! POST   /api/v1/rooms
//! GET    /api/v1/host/rooms
//! POST   /api/v1/host/reservations/{id}/complete
//! POST   /api/v1/host/reservations/{id}/cancel
//! POST   /api/v1/reservations
//! PATCH  /api/v1/reservations/{id}
//! DELETE /api/v1/reservations/{id}
//! POST   /api/v1/reservations/{id}/reviews
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_room_routes(cfg);
    configure_host_routes(cfg);
    configure_reservation_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
    );
}

fn configure_room_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rooms")
            .service(handlers::rooms::create_room)
    );
}

fn configure_host_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/host")
            .service(handlers::rooms::get_host_rooms)
            .service(handlers::reservations::complete_reservation_by_host)
            .service(handlers::reservations::cancel_reservation_by_host)
    );
}

fn configure_reservation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reservations")
            .service(handlers::reservations::create_reservation)
            .service(handlers::reservations::modify_reservation)
            .service(handlers::reservations::cancel_reservation)
            // 리뷰는 예약의 하위 리소스
            .service(handlers::reviews::create_review)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "amabnb_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().service(health_check)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "amabnb_backend");
    }

    #[actix_web::test]
    async fn test_request_without_user_header_is_unauthorized() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;
        let req = test::TestRequest::get().uri("/api/v1/host/rooms").to_request();

        let response = test::call_service(&app, req).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
