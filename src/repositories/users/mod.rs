//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`](user_store::UserStore) 계약과 두 가지 구현을 제공합니다.
//!
//! - [`MongoUserStore`](mongo_user_repo::MongoUserStore): 운영용 MongoDB 저장소
//! - [`InMemoryUserStore`](memory_user_repo::InMemoryUserStore): 개발/테스트용
//!
//! # Examples
//!
//! ```rust,ignore
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let service = UserService::new(store);
//! ```

pub mod memory_user_repo;
pub mod mongo_user_repo;
pub mod user_store;

pub use memory_user_repo::InMemoryUserStore;
pub use mongo_user_repo::MongoUserStore;
pub use user_store::{DeleteOutcome, StoreError, StoreResult, UserStore};
