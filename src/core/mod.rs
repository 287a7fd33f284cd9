//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 기능을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 도메인 에러 분류 (검증 / 충돌 / 없음 / 영속화 실패)
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **ErrorContext**: 외부 라이브러리 에러를 `InternalError`로 변환
//!
//! ## 에러 처리 흐름
//!
//! ```text
//! StoreError / bcrypt::BcryptError / BlockingError
//!          │  (UserService 가 분류)
//!          ▼
//!      AppError ──► ResponseError ──► JSON 응답
//! ```

pub mod errors;

pub use errors::*;
