//! # Domain Entities
//!
//! 저장소에 영속되는 도메인 엔티티들입니다.

pub mod users;
