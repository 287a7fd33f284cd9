//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! - [`users`]: 사용자 생명주기 관리
//! - [`credentials`]: 비밀번호 해싱과 확인 토큰 생성
//!
//! 서비스는 저장소를 생성자로 주입받아 `web::Data`로 공유됩니다.
//!
//! ```rust,ignore
//! let service = web::Data::new(UserService::new(store));
//! App::new().app_data(service.clone())
//! ```

pub mod credentials;
pub mod users;
