//! 사용자 응답 DTO 모듈
//!
//! 엔티티에서 공개 가능한 필드만 복사한 [`UserResponse`]를 제공합니다.

pub mod user_response;

pub use user_response::UserResponse;
