//! 사용자 요청 DTO 모듈
//!
//! - [`CreateUserRequest`]: 회원 가입 (모든 필드 필수)
//! - [`UpdateUserRequest`]: 부분 업데이트 (빈 문자열은 변경 없음)

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
