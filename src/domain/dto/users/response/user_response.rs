use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{User, UserProfile};

/// 공개 사용자 뷰
///
/// 비밀번호, 솔트, 확인 토큰은 타입 수준에서 존재하지 않습니다.
/// `id`는 목록 조회에서만 채워집니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    pub name: String,
    pub position: String,
    pub profile: UserProfile,
    pub cpf: String,
}

impl UserResponse {
    /// 식별자를 포함한 목록용 뷰
    pub fn with_id(user: User) -> Self {
        let id = user.id.clone();
        Self {
            id,
            ..Self::from(user)
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            username,
            email,
            name,
            position,
            profile,
            cpf,
            ..
        } = user;

        Self {
            id: None,
            username,
            email,
            name,
            position,
            profile,
            cpf,
        }
    }
}
