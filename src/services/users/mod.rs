//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기(생성, 조회, 수정, 삭제) 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 솔트 해싱 (요청 스레드 밖에서 실행)
//! - 응답 DTO에서 비밀번호, 솔트, 확인 토큰 제외
//! - cpf / username / email 중복은 저장소 제약으로 판정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(store);
//! let view = service.create_user(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
