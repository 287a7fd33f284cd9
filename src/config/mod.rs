//! 애플리케이션 설정 모듈
//!
//! 환경 변수에서 값을 읽는 타입별 설정 접근자를 제공합니다.
//!
//! - [`PasswordConfig`]: bcrypt cost
//! - [`ServerConfig`]: HTTP 바인딩 주소
//! - [`StorageConfig`]: 저장소 구현 선택과 MongoDB 연결 정보
//! - [`RateLimitConfig`]: 요청 속도 제한
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::{PasswordConfig, StorageConfig, StorageBackend};
//!
//! let cost = PasswordConfig::bcrypt_cost();
//! if StorageConfig::backend() == StorageBackend::Memory { /* ... */ }
//! ```

pub mod data_config;

pub use data_config::*;
