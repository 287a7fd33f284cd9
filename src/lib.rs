//! 사용자 계정 서비스 백엔드
//!
//! 사용자 계정의 생성, 조회, 수정, 삭제를 제공하는 REST 서비스입니다.
//! 비밀번호는 사용자별 솔트로 bcrypt 해싱되며, cpf / username / email
//! 중복은 저장소의 유니크 제약으로 판정합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 계정 생성, 목록/단건 조회, 부분 수정, 삭제
//! - **입력 검증**: `validator` 기반 필드 검증과 CPF 체크섬 검사
//! - **저장소 선택**: MongoDB 또는 인메모리 저장소 (`STORAGE_BACKEND`)
//! - **생성자 주입**: 서비스가 `Arc<dyn UserStore>`를 주입받아 `web::Data`로 공유
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 에러 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore 구현체
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_account_service::repositories::users::InMemoryUserStore;
//! use user_account_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let view = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
