//! # 사용자 저장소 계약
//!
//! 서비스가 저장소에 요구하는 최소 연산과, 저장소가 돌려주는 오류 타입을
//! 정의합니다. 유니크 제약 위반은 자유 텍스트가 아니라 [`UniqueField`]
//! 목록으로 보고되므로 서비스는 문자열을 해석하지 않습니다.
//!
//! | 연산 | 의미 |
//! |------|------|
//! | `save` | `id`가 없으면 삽입(저장소가 id 할당), 있으면 id 기준 교체 (대상이 없으면 `Missing`) |
//! | `find_all` | 전체 조회 |
//! | `find_by_id` | 단건 조회, 형식이 맞지 않는 id 는 단순히 없음 |
//! | `delete` | id 기준 삭제, 영향받은 행 수 보고 |

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::users::{UniqueField, User};

/// 저장소 계층 오류
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 하나 이상의 유니크 제약 위반
    #[error("unique constraint violated on {0:?}")]
    UniqueViolation(Vec<UniqueField>),

    /// 교체 대상 id가 저장소에 없음 (다시 생성하지 않음)
    #[error("no user stored under id {0}")]
    Missing(String),

    /// 그 밖의 모든 백엔드 오류 (연결, 직렬화, 쿼리 등)
    #[error("storage backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 삭제 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub affected: u64,
}

/// 사용자 영속화 계약
///
/// 서비스는 `Arc<dyn UserStore>`로 이 trait을 주입받습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자 저장 (삽입 또는 교체)
    ///
    /// `id`가 있는 레코드는 기존 레코드만 교체하며, 그 사이 삭제되었다면
    /// `StoreError::Missing`을 돌려줍니다.
    async fn save(&self, user: User) -> StoreResult<User>;

    /// 전체 사용자 조회
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// id로 사용자 조회
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    /// id로 사용자 삭제
    ///
    /// 백엔드가 결과 객체를 돌려주지 않는 경우 `Ok(None)`입니다.
    async fn delete(&self, id: &str) -> StoreResult<Option<DeleteOutcome>>;
}
