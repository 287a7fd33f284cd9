//! # 인메모리 사용자 저장소
//!
//! 개발 환경(`STORAGE_BACKEND=memory`)과 테스트에서 사용하는 저장소입니다.
//! MongoDB 구현과 같은 세 가지 유니크 제약(cpf, username, email)을 저장
//! 시점에 검사하며, 위반된 필드를 모두 보고합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::user_store::{DeleteOutcome, StoreError, StoreResult, UserStore};
use crate::domain::entities::users::{UniqueField, User};

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다른 레코드와 충돌하는 유니크 필드 목록
    fn collisions(existing: &HashMap<String, User>, candidate: &User, id: &str) -> Vec<UniqueField> {
        let others: Vec<&User> = existing
            .iter()
            .filter(|(key, _)| key.as_str() != id)
            .map(|(_, user)| user)
            .collect();

        UniqueField::PRECEDENCE
            .into_iter()
            .filter(|field| {
                others.iter().any(|other| match field {
                    UniqueField::Cpf => other.cpf == candidate.cpf,
                    UniqueField::Username => other.username == candidate.username,
                    UniqueField::Email => other.email == candidate.email,
                })
            })
            .collect()
    }
}

fn poisoned<E>(_: E) -> StoreError {
    StoreError::Backend("in-memory user store lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save(&self, mut user: User) -> StoreResult<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        let id = match user.id.clone() {
            Some(id) if !users.contains_key(&id) => return Err(StoreError::Missing(id)),
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        let collided = Self::collisions(&users, &user, &id);
        if !collided.is_empty() {
            return Err(StoreError::UniqueViolation(collided));
        }

        user.id = Some(id.clone());
        users.insert(id, user.clone());

        log::debug!("in-memory store saved user {:?}", user.id);
        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;

        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn delete(&self, id: &str) -> StoreResult<Option<DeleteOutcome>> {
        let mut users = self.users.write().map_err(poisoned)?;
        let affected = u64::from(users.remove(id).is_some());
        Ok(Some(DeleteOutcome { affected }))
    }
}
