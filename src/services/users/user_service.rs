//! # 사용자 생명주기 서비스
//!
//! 사용자 계정의 생성, 조회, 수정, 삭제를 조율하는 핵심 비즈니스 로직입니다.
//!
//! ```text
//! Handler ──► UserService ──► Arc<dyn UserStore>
//!                 │
//!                 ├─ PasswordHasher (web::block 에서 실행)
//!                 └─ TokenGenerator
//! ```
//!
//! ## 에러 분류
//!
//! | 상황 | 결과 |
//! |------|------|
//! | 생성 중 유니크 제약 위반 | `Conflict` (cpf > username > email 우선) |
//! | 생성 중 그 밖의 저장소 오류 | `DatabaseError` |
//! | 수정 중 대상이 삭제됨 | `NotFound` |
//! | 수정 중 그 밖의 저장 오류 | `DatabaseError` (충돌 구분 없음) |
//! | 대상 없음 / 등록된 사용자 없음 | `NotFound` |
//! | 알 수 없는 프로필 | `ValidationError` |
//!
//! 서비스는 유니크 여부를 미리 조회하지 않습니다. 항상 저장을 시도하고
//! 저장소가 보고한 위반을 해석하므로 동시 가입에서도 경쟁 조건이 없습니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;

use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::users::{
            request::{CreateUserRequest, UpdateUserRequest},
            response::UserResponse,
        },
        entities::users::{Credentials, NewUser, UniqueField, User, UserChanges, UserProfile},
    },
    repositories::users::{StoreError, UserStore},
    services::credentials::{PasswordHasher, TokenGenerator},
    utils::string_utils::non_blank,
};

const USER_NOT_FOUND: &str = "사용자를 찾을 수 없습니다";

/// 사용자 생명주기 서비스
///
/// 상태를 갖지 않으며 `web::Data`로 워커 간에 공유됩니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenGenerator,
}

impl UserService {
    /// 환경 설정의 bcrypt cost로 서비스를 만듭니다.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_credentials(store, PasswordHasher::from_config(), TokenGenerator::default())
    }

    pub fn with_credentials(
        store: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        tokens: TokenGenerator,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// 새 사용자 생성
    ///
    /// 토큰, 솔트, 해시를 모두 계산한 뒤 한 번만 저장하므로 실패 시 남는
    /// 부분 상태가 없습니다. 응답에는 id, 비밀번호, 솔트, 토큰이 없습니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = Instant::now();

        let profile = parse_profile(&request.profile)?;
        let confirmation_token = self.tokens.generate();

        let hasher = self.hasher;
        let password = request.password;
        let hash_start = Instant::now();
        let (salt, password_hash) = web::block(move || {
            let salt = hasher.generate_salt();
            hasher.hash(&password, &salt).map(|hash| (salt, hash))
        })
        .await
        .context("비밀번호 해싱 작업 실패")??;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            NewUser {
                email: request.email,
                username: request.username,
                name: request.name,
                position: request.position,
                profile,
                cpf: request.cpf,
            },
            Credentials {
                password_hash,
                salt,
                confirmation_token,
            },
        );

        let created = self.store.save(user).await.map_err(creation_error)?;

        log::info!(
            "User {:?} created, total user creation took: {:?}",
            created.id,
            start_time.elapsed()
        );

        Ok(UserResponse::from(created))
    }

    /// 전체 사용자 조회
    ///
    /// 등록된 사용자가 하나도 없으면 빈 목록 대신 `NotFound`를 돌려줍니다.
    pub async fn find_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.store.find_all().await.map_err(read_error)?;

        if users.is_empty() {
            return Err(AppError::NotFound("등록된 사용자가 없습니다".to_string()));
        }

        Ok(users.into_iter().map(UserResponse::with_id).collect())
    }

    /// id로 사용자 조회
    pub async fn find_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .store
            .find_by_id(id)
            .await
            .map_err(read_error)?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 부분 업데이트
    ///
    /// 값이 있고 비어 있지 않은 필드만 덮어씁니다. 빈 문자열과 누락은 모두
    /// 기존 값을 유지합니다. 조회 후 저장 전에 삭제된 사용자는 `NotFound`이며,
    /// 그 밖의 저장 실패는 유니크 위반을 포함해 모두 `DatabaseError`입니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let mut user = self
            .store
            .find_by_id(id)
            .await
            .map_err(read_error)?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let UpdateUserRequest {
            name,
            username,
            email,
            position,
            profile,
            cpf,
        } = request;

        let profile = non_blank(profile)
            .map(|profile| parse_profile(&profile))
            .transpose()?;

        user.apply_changes(UserChanges {
            name: non_blank(name),
            username: non_blank(username),
            email: non_blank(email),
            position: non_blank(position),
            profile,
            cpf: non_blank(cpf),
        });

        let saved = self.store.save(user).await.map_err(|e| match e {
            StoreError::Missing(_) => {
                log::warn!("User {} was deleted before the update was saved", id);
                AppError::NotFound(USER_NOT_FOUND.to_string())
            }
            e => {
                log::error!("Failed to save updated user {}: {}", id, e);
                AppError::DatabaseError("사용자 정보를 데이터베이스에 저장하는 중 오류가 발생했습니다".to_string())
            }
        })?;

        Ok(UserResponse::from(saved))
    }

    /// 사용자 삭제 (물리 삭제)
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        let outcome = self.store.delete(id).await.map_err(|e| {
            log::error!("Failed to delete user {}: {}", id, e);
            AppError::DatabaseError("사용자를 삭제하는 중 오류가 발생했습니다".to_string())
        })?;

        match outcome {
            None => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
            Some(outcome) if outcome.affected == 0 => Err(AppError::NotFound(
                "해당 ID의 사용자를 찾을 수 없습니다".to_string(),
            )),
            Some(_) => {
                log::info!("User {} deleted", id);
                Ok(())
            }
        }
    }
}

/// 프로필 문자열을 열거형으로 변환합니다. 알 수 없는 값은 검증 오류입니다.
fn parse_profile(raw: &str) -> AppResult<UserProfile> {
    raw.parse::<UserProfile>().map_err(AppError::ValidationError)
}

/// 생성 시 저장소 오류 분류
fn creation_error(err: StoreError) -> AppError {
    match err {
        StoreError::UniqueViolation(fields) => match UniqueField::most_significant(&fields) {
            Some(field) => {
                log::warn!("User creation rejected, duplicate {}", field);
                AppError::Conflict { field }
            }
            None => {
                log::error!("Unique violation without a known field");
                AppError::DatabaseError("사용자를 데이터베이스에 저장하는 중 오류가 발생했습니다".to_string())
            }
        },
        err @ (StoreError::Missing(_) | StoreError::Backend(_)) => {
            log::error!("Failed to save new user: {}", err);
            AppError::DatabaseError("사용자를 데이터베이스에 저장하는 중 오류가 발생했습니다".to_string())
        }
    }
}

fn read_error(err: StoreError) -> AppError {
    log::error!("Failed to read users: {}", err);
    AppError::DatabaseError("사용자 정보를 조회하는 중 오류가 발생했습니다".to_string())
}
