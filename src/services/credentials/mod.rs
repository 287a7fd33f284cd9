//! 자격 증명 생성 모듈
//!
//! - [`PasswordHasher`]: bcrypt 솔트 생성 및 해싱
//! - [`TokenGenerator`]: 계정 확인 토큰 생성
//!
//! # Security
//!
//! - 해시는 되돌릴 수 없는 느린 솔트 KDF(bcrypt)만 사용합니다.
//! - 솔트와 토큰은 `rand`의 CSPRNG(`thread_rng`)에서 얻습니다.

pub mod password_hasher;
pub mod token_generator;

pub use password_hasher::PasswordHasher;
pub use token_generator::TokenGenerator;
