//! User Entity Implementation
//!
//! 사용자 계정 엔티티의 핵심 구현체입니다.
//! 비밀번호 해시, 솔트, 확인 토큰은 엔티티에만 존재하며 어떤 응답 DTO로도
//! 복사되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::UserProfile;

/// 사용자 엔티티
///
/// `id`는 저장소가 최초 저장 시 할당하며 이후 변경되지 않습니다.
/// `email`, `username`, `cpf`는 저장소의 유니크 제약으로 보호됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 이메일 (unique)
    pub email: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 표시 이름
    pub name: String,
    /// 직책
    pub position: String,
    /// 접근 프로필
    pub profile: UserProfile,
    /// 브라질 납세자 번호, `000.000.000-00` 형식 (unique)
    pub cpf: String,
    /// bcrypt 해시
    pub password: String,
    /// 해시에 사용된 bcrypt 솔트
    pub salt: String,
    /// 계정 확인용 토큰 (32바이트 hex)
    pub confirmation_token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 신규 사용자의 식별 정보
///
/// 자격 증명(해시, 솔트, 토큰)과 분리해 두어 서비스가 해싱을 마친 뒤에만
/// 엔티티를 완성할 수 있게 합니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub name: String,
    pub position: String,
    pub profile: UserProfile,
    pub cpf: String,
}

/// 저장 전에 계산된 자격 증명
#[derive(Debug, Clone)]
pub struct Credentials {
    pub password_hash: String,
    pub salt: String,
    pub confirmation_token: String,
}

/// 부분 업데이트 내용
///
/// `None`인 필드는 기존 값을 유지합니다. 빈 문자열은 이 구조체를 만들기
/// 전에 이미 `None`으로 정규화되어 있어야 합니다.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub profile: Option<UserProfile>,
    pub cpf: Option<String>,
}

impl User {
    /// 아직 저장되지 않은 사용자 생성 (id 없음)
    pub fn new(fields: NewUser, credentials: Credentials) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            email: fields.email,
            username: fields.username,
            name: fields.name,
            position: fields.position,
            profile: fields.profile,
            cpf: fields.cpf,
            password: credentials.password_hash,
            salt: credentials.salt,
            confirmation_token: credentials.confirmation_token,
            created_at: now,
            updated_at: now,
        }
    }

    /// 변경 사항을 필드 단위로 병합합니다.
    pub fn apply_changes(&mut self, changes: UserChanges) {
        let UserChanges {
            name,
            username,
            email,
            position,
            profile,
            cpf,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(username) = username {
            self.username = username;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(profile) = profile {
            self.profile = profile;
        }
        if let Some(cpf) = cpf {
            self.cpf = cpf;
        }

        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::new(
            NewUser {
                email: "mock@mail.com".to_string(),
                username: "mock".to_string(),
                name: "Mock Mockerson".to_string(),
                position: "police".to_string(),
                profile: UserProfile::Admin,
                cpf: "056.065.766-86".to_string(),
            },
            Credentials {
                password_hash: "hash".to_string(),
                salt: "salt".to_string(),
                confirmation_token: "token".to_string(),
            },
        )
    }

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = sample();

        assert!(user.id.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_apply_changes_touches_only_given_fields() {
        let mut user = sample();

        user.apply_changes(UserChanges {
            name: Some("Mocking Mockerson".to_string()),
            profile: Some(UserProfile::Standard),
            ..Default::default()
        });

        assert_eq!(user.name, "Mocking Mockerson");
        assert_eq!(user.profile, UserProfile::Standard);
        assert_eq!(user.username, "mock");
        assert_eq!(user.email, "mock@mail.com");
        assert_eq!(user.cpf, "056.065.766-86");
        assert_eq!(user.password, "hash");
    }
}
