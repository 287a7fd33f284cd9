//! 사용자 부분 업데이트 요청 DTO

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use super::create_user::{validate_cpf, validate_profile};
use crate::utils::string_utils::is_blank;

/// 부분 업데이트 요청
///
/// 모든 필드는 선택 사항입니다. 빈 문자열은 "변경 없음"을 뜻하므로 검증을
/// 통과시키고, 값이 있을 때만 형식을 확인합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 200, message = "이름은 200자 이하여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(max = 50, message = "사용자명은 50자 이하여야 합니다"))]
    pub username: Option<String>,

    #[validate(length(max = 200, message = "이메일 주소는 200자 이하여야 합니다"))]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: Option<String>,

    #[validate(length(max = 200, message = "직책은 200자 이하여야 합니다"))]
    pub position: Option<String>,

    #[validate(custom(function = "validate_optional_profile"))]
    pub profile: Option<String>,

    #[validate(custom(function = "validate_optional_cpf"))]
    pub cpf: Option<String>,
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if is_blank(email) || email.validate_email() {
        return Ok(());
    }

    Err(ValidationError::new("email")
        .with_message("유효한 이메일 주소를 입력해주세요".into()))
}

fn validate_optional_profile(profile: &str) -> Result<(), ValidationError> {
    if is_blank(profile) {
        return Ok(());
    }
    validate_profile(profile)
}

fn validate_optional_cpf(cpf: &str) -> Result<(), ValidationError> {
    if is_blank(cpf) {
        return Ok(());
    }
    validate_cpf(cpf)
}
