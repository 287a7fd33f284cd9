//! # MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 사용자 문서를 저장합니다.
//!
//! ## 인덱스
//!
//! | 이름 | 필드 | 속성 |
//! |------|------|------|
//! | `cpf_unique` | `cpf` | UNIQUE |
//! | `username_unique` | `username` | UNIQUE |
//! | `email_unique` | `email` | UNIQUE |
//!
//! 유니크 인덱스 위반(중복 키, 코드 11000)은 드라이버 메시지에 포함된 인덱스
//! 이름으로 [`UniqueField`]를 판별해 `StoreError::UniqueViolation`으로
//! 변환합니다. 문자열 해석은 이 어댑터 안에서만 일어납니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use super::user_store::{DeleteOutcome, StoreError, StoreResult, UserStore};
use crate::db::Database;
use crate::domain::entities::users::{UniqueField, User};

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 저장소
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// 유니크 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 중복 데이터가 있으면
    /// 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> StoreResult<()> {
        let indexes = UniqueField::PRECEDENCE.into_iter().map(|field| {
            let mut keys = Document::new();
            keys.insert(field.as_str(), 1);

            IndexModel::builder()
                .keys(keys)
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name(field.index_name().to_string())
                        .build(),
                )
                .build()
        });

        self.collection
            .create_indexes(indexes)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        log::info!("✅ users 컬렉션 유니크 인덱스 준비 완료");
        Ok(())
    }
}

/// 드라이버 오류를 저장소 오류로 분류합니다.
fn classify(err: MongoError) -> StoreError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = err.kind.as_ref() {
        if let Some(violation) = classify_write_error(write_error.code, &write_error.message) {
            return violation;
        }
    }

    StoreError::Backend(err.to_string())
}

/// 쓰기 오류 코드와 메시지에서 유니크 제약 위반을 판별합니다.
///
/// 알려진 유니크 인덱스가 아닌 중복 키(`_id_` 등)는 `None`입니다.
fn classify_write_error(code: i32, message: &str) -> Option<StoreError> {
    if code != DUPLICATE_KEY_CODE {
        return None;
    }

    let fields = fields_in_duplicate_key_message(message);
    (!fields.is_empty()).then_some(StoreError::UniqueViolation(fields))
}

/// 중복 키 메시지에서 위반된 인덱스를 찾습니다.
fn fields_in_duplicate_key_message(message: &str) -> Vec<UniqueField> {
    UniqueField::PRECEDENCE
        .into_iter()
        .filter(|field| message.contains(field.index_name()))
        .collect()
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn save(&self, mut user: User) -> StoreResult<User> {
        match user.id.clone() {
            None => {
                user.id = Some(ObjectId::new().to_hex());
                self.collection.insert_one(&user).await.map_err(classify)?;
            }
            Some(id) => {
                let result = self
                    .collection
                    .replace_one(doc! { "_id": id.as_str() }, &user)
                    .upsert(false)
                    .await
                    .map_err(classify)?;

                if result.matched_count == 0 {
                    return Err(StoreError::Missing(id));
                }
            }
        }

        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(classify)?;

        cursor.try_collect::<Vec<User>>().await.map_err(classify)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(classify)
    }

    async fn delete(&self, id: &str) -> StoreResult<Option<DeleteOutcome>> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(classify)?;

        Ok(Some(DeleteOutcome {
            affected: result.deleted_count,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message_maps_index_to_field() {
        let message = "E11000 duplicate key error collection: accounts.users index: cpf_unique dup key: { cpf: \"056.065.766-86\" }";

        assert_eq!(fields_in_duplicate_key_message(message), vec![UniqueField::Cpf]);
    }

    #[test]
    fn test_duplicate_key_write_error_is_unique_violation() {
        let message = "E11000 duplicate key error collection: accounts.users index: username_unique dup key: { username: \"mock\" }";

        assert_eq!(
            classify_write_error(DUPLICATE_KEY_CODE, message),
            Some(StoreError::UniqueViolation(vec![UniqueField::Username]))
        );
    }

    #[test]
    fn test_other_write_errors_are_not_unique_violations() {
        let id_message = "E11000 duplicate key error collection: accounts.users index: _id_ dup key";
        let cpf_message = "index: cpf_unique";

        assert_eq!(classify_write_error(DUPLICATE_KEY_CODE, id_message), None);
        assert_eq!(classify_write_error(121, cpf_message), None);
    }

    #[test]
    fn test_unclassified_driver_error_is_backend() {
        let err = MongoError::custom("connection reset");

        assert!(matches!(classify(err), StoreError::Backend(_)));
    }

    #[test]
    fn test_duplicate_on_unknown_index_maps_to_nothing() {
        let message = "E11000 duplicate key error collection: accounts.users index: _id_ dup key";

        assert!(fields_in_duplicate_key_message(message).is_empty());
    }
}
