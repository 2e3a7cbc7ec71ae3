//! MongoDB 연결 관리 모듈
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="amabnb_dev"
//! ```
//!
//! 연결은 `main`에서 한 번 만들어 [`ServiceLocator`](crate::core::registry::ServiceLocator)에
//! 등록하고, `#[repository]` 리포지토리들이 `db` 필드로 주입받습니다.

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client};
use std::env;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "amabnb_dev";
const APP_NAME: &str = "amabnb";

/// `users`, `rooms`, `reservations`, `reviews` 컬렉션이 있는 데이터베이스 핸들
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
}

impl Database {
    /// 환경 변수로 연결하고 `ping`이 성공해야 반환합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let (mongodb_uri, database_name) = Self::connection_target();

        let mut client_options = ClientOptions::parse(&mongodb_uri).await?;
        client_options.app_name = Some(APP_NAME.to_string());

        let database = Client::with_options(client_options)?.database(&database_name);
        database.run_command(doc! { "ping": 1 }).await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);
        Ok(Self { database })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.database.clone()
    }

    fn connection_target() -> (String, String) {
        let read = |key: &str, default: &str| {
            env::var(key)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        (
            read("MONGODB_URI", DEFAULT_MONGODB_URI),
            read("DATABASE_NAME", DEFAULT_DATABASE_NAME),
        )
    }
}
