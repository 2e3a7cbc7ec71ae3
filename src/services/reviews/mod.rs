//! # 리뷰 서비스

pub mod review_service;

pub use review_service::ReviewService;
