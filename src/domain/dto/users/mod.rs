//! 사용자 DTO 모듈
//!
//! ```text
//! users/
//! ├── request/   CreateUserRequest, UpdateUserRequest
//! └── response/  UserResponse
//! ```

pub mod request;
pub mod response;
