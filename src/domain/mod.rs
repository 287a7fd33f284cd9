//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 사용자 엔티티와 API 경계의 DTO를 담습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 사용자 레코드, 프로필, 유니크 필드
//! └── DTOs      - 요청 검증 규칙과 공개 응답 뷰
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## [`entities`]
//!
//! - `User`: 비밀번호 해시, 솔트, 확인 토큰을 포함한 전체 레코드
//! - `UserProfile`: `ADMIN` / `STANDARD`
//! - `UniqueField`: 유니크 제약 필드와 충돌 판정 우선순위 (cpf > username > email)
//!
//! ## [`dto`]
//!
//! - 요청 DTO는 `validator` derive로 경계 검증 규칙을 선언합니다
//! - `UserResponse`는 비밀번호, 솔트, 확인 토큰을 포함하지 않습니다
//!
//! ```rust,ignore
//! validate_request(&request)?;
//! let view = UserResponse::from(saved_user);
//! ```

pub mod entities;
pub mod dto;
