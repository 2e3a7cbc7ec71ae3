//! # 리뷰 리포지토리

pub mod review_repo;

pub use review_repo::ReviewRepository;
