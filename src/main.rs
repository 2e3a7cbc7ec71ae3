//! 아마비앤비 백엔드 메인 애플리케이션
//!
//! MongoDB, Redis 연결과 서비스 레지스트리를 초기화하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use amabnb_backend::caching::redis::RedisClient;
use amabnb_backend::config::{Environment, RateLimitConfig, ServerConfig};
use amabnb_backend::core::registry::ServiceLocator;
use amabnb_backend::db::Database;
use amabnb_backend::middlewares::USER_ID_HEADER;
use amabnb_backend::repositories::create_all_indexes;
use amabnb_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 아마비앤비 서비스 시작중... ({:?})", Environment::current());

    let (database, redis_client) = initialize_data_stores().await?;

    ServiceLocator::set(database);
    ServiceLocator::set(redis_client);

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| std::io::Error::other(format!("서비스 초기화 실패: {}", e)))?;

    create_all_indexes()
        .await
        .map_err(|e| std::io::Error::other(format!("인덱스 생성 실패: {}", e)))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

/// HTTP 서버를 구성하고 실행합니다.
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 적용합니다.
async fn start_http_server() -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// `PROFILE`에 따라 `.env.dev`, `.env.prod` 또는 기본 `.env` 파일을 로드합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화. 기본값은 `info,actix_web=debug`입니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다.
async fn initialize_data_stores() -> std::io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// 프론트엔드 개발 서버와의 통신을 허용하는 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .allowed_header(USER_ID_HEADER)
        .expose_headers(vec![header::LOCATION])
        .supports_credentials()
        .max_age(3600)
}
