//! 공용 유틸리티 모듈
//!
//! - [`string_utils`]: 빈 문자열 정규화
//! - [`cpf`]: CPF 검증 자리 계산

pub mod cpf;
pub mod string_utils;
