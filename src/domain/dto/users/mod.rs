//! 사용자 DTO

pub mod create_user_request;

pub use create_user_request::CreateUserRequest;
