//! 사용자 생성 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::UserProfile;
use crate::utils::cpf::{is_valid_cpf, CPF_MASKED_LEN};

/// 회원 가입 요청
///
/// 핸들러가 서비스 호출 전에 [`validate_request`](crate::domain::dto::validate_request)로
/// 검증합니다. `profile`은 문자열로 받아 검증 단계에서 열거형 소속을 확인하고,
/// 서비스가 다시 한 번 [`UserProfile`]로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    #[validate(length(
        min = 1,
        max = 200,
        message = "이메일 주소는 1-200자 사이여야 합니다"
    ))]
    pub email: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "이름은 1-200자 사이여야 합니다"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "사용자명은 1-50자 사이여야 합니다"
    ))]
    pub username: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "직책은 1-200자 사이여야 합니다"
    ))]
    pub position: String,

    #[validate(custom(function = "validate_profile"))]
    pub profile: String,

    #[validate(length(
        min = 6,
        message = "비밀번호는 최소 6자 이상이어야 합니다"
    ))]
    pub password: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,
}

pub(crate) fn validate_profile(profile: &str) -> Result<(), ValidationError> {
    profile.parse::<UserProfile>().map(|_| ()).map_err(|_| {
        ValidationError::new("invalid_profile")
            .with_message("유효한 사용자 프로필을 입력해주세요 (ADMIN, STANDARD)".into())
    })
}

pub(crate) fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    if cpf.chars().count() != CPF_MASKED_LEN {
        return Err(ValidationError::new("cpf_length")
            .with_message("CPF는 14자로 입력해주세요".into()));
    }

    if !is_valid_cpf(cpf) {
        return Err(ValidationError::new("invalid_cpf")
            .with_message("유효한 CPF를 입력해주세요".into()));
    }

    Ok(())
}
