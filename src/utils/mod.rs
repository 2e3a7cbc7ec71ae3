//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증/정리, `ObjectId` 파싱
//! - [`display_terminal`] - 서비스 레지스트리 초기화 출력

pub mod display_terminal;
pub mod string_utils;
