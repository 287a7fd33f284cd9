//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 구체 저장소가 아니라 `Arc<dyn UserStore>`를 생성자로 주입받습니다.
//! 어떤 구현을 쓸지는 `STORAGE_BACKEND` 설정에 따라 `main`에서 결정됩니다.

pub mod users;
