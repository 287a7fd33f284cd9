//! HTTP 요청/응답 처리 계층
//!
//! 핸들러는 요청을 검증하고 서비스에 위임하며, 서비스가 돌려준
//! `AppError`는 `ResponseError` 구현을 통해 JSON 에러 응답이 됩니다.

pub mod users;
