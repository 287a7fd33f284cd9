//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티와 값 타입을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`]: 저장되는 사용자 레코드 (해시, 솔트, 확인 토큰 포함)
//! - [`UserProfile`]: 닫힌 접근 프로필 열거형
//! - [`UniqueField`]: 유니크 제약 필드 식별자 (cpf > username > email 우선순위)
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, NewUser, Credentials, UserProfile};
//!
//! let user = User::new(
//!     NewUser { profile: "ADMIN".parse::<UserProfile>()?, /* ... */ },
//!     Credentials { /* 해시, 솔트, 토큰 */ },
//! );
//! ```

pub mod profile;
pub mod unique_field;
pub mod user;

pub use profile::UserProfile;
pub use unique_field::UniqueField;
pub use user::{Credentials, NewUser, User, UserChanges};
