//! 서버 및 데이터 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 캐시 TTL, Rate Limiting 설정을 관리합니다.

use std::env;

use log::{error, info};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Redis 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    const DEFAULT_TTL_SECONDS: u64 = 600;

    /// 사용자/숙소 캐시 TTL(초)을 반환합니다.
    ///
    /// `CACHE_TTL_SECONDS`가 0이면 캐시에 쓰지 않습니다.
    pub fn ttl_seconds() -> u64 {
        Self::parse_ttl(env::var("CACHE_TTL_SECONDS").ok().as_deref())
    }

    pub fn is_enabled() -> bool {
        Self::ttl_seconds() > 0
    }

    fn parse_ttl(raw: Option<&str>) -> u64 {
        raw.and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_TTL_SECONDS)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    const DEFAULT_PER_SECOND: u64 = 100;
    const DEFAULT_BURST_SIZE: u32 = 200;

    /// 환경변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let config = Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
            env::var("RATE_LIMIT_BURST_SIZE").ok().as_deref(),
        );

        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }

    fn from_values(per_second: Option<&str>, burst_size: Option<&str>) -> Self {
        let per_second = per_second
            .map(|raw| {
                raw.parse::<u64>().unwrap_or_else(|e| {
                    error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_PER_SECOND);
                    Self::DEFAULT_PER_SECOND
                })
            })
            .unwrap_or(Self::DEFAULT_PER_SECOND);

        let burst_size = burst_size
            .map(|raw| {
                raw.parse::<u32>().unwrap_or_else(|e| {
                    error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_BURST_SIZE);
                    Self::DEFAULT_BURST_SIZE
                })
            })
            .unwrap_or(Self::DEFAULT_BURST_SIZE);

        Self { per_second, burst_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
        assert!(Environment::from_str("unknown").is_production());
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_cache_ttl_parsing() {
        assert_eq!(CacheConfig::parse_ttl(None), 600);
        assert_eq!(CacheConfig::parse_ttl(Some("30")), 30);
        assert_eq!(CacheConfig::parse_ttl(Some("0")), 0);
        assert_eq!(CacheConfig::parse_ttl(Some("abc")), 600);
    }

    #[test]
    fn test_rate_limit_from_values() {
        assert_eq!(
            RateLimitConfig::from_values(None, None),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
        assert_eq!(
            RateLimitConfig::from_values(Some("20"), Some("40")),
            RateLimitConfig { per_second: 20, burst_size: 40 }
        );
        assert_eq!(
            RateLimitConfig::from_values(Some("fast"), Some("-1")),
            RateLimitConfig { per_second: 100, burst_size: 200 }
        );
    }
}
