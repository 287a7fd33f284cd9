//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 타입과 요청 검증 진입점입니다.
//!
//! 요청 DTO는 `validator` derive 규칙을 선언하고, 핸들러는 서비스 호출 전에
//! [`validate_request`]를 호출해 필드 단위 오류 목록을 받습니다.
//!
//! ```rust,ignore
//! validate_request(&payload)?; // 실패 시 AppError::InvalidFields
//! let user = service.create_user(payload.into_inner()).await?;
//! ```

pub mod users;

use actix_web::error::JsonPayloadError;
use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, FieldError};

const MISSING_FIELD_MESSAGE: &str = "필수 항목입니다";

/// 요청을 검증하고 실패 시 필드 단위 오류 목록을 돌려줍니다.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|errors| AppError::InvalidFields(flatten_errors(&errors)))
}

/// `ValidationErrors`를 필드명, 메시지 순으로 정렬된 목록으로 평탄화합니다.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flattened: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(field.clone(), message)
            })
        })
        .collect();

    flattened.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    flattened
}

/// JSON 본문 역직렬화 실패를 검증 오류로 변환합니다.
///
/// 필수 필드 누락은 해당 필드의 `InvalidFields` 항목이 되고, 그 밖의 본문
/// 오류(문법, 타입 불일치, 크기 초과 등)는 `ValidationError`입니다.
pub fn json_payload_error(err: &JsonPayloadError) -> AppError {
    if let JsonPayloadError::Deserialize(e) = err {
        if let Some(field) = missing_field(&e.to_string()) {
            return AppError::InvalidFields(vec![FieldError::new(field, MISSING_FIELD_MESSAGE)]);
        }
    }

    AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err))
}

/// serde 의 "missing field `name`" 메시지에서 필드명을 꺼냅니다.
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next().filter(|field| !field.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::CreateUserRequest;

    #[test]
    fn test_validate_request_flattens_sorted_field_errors() {
        let request = CreateUserRequest {
            email: "mock@mail.com".to_string(),
            name: String::new(),
            username: "mock".to_string(),
            position: "police".to_string(),
            profile: "GUEST".to_string(),
            password: "123".to_string(),
            cpf: "056.065.766-86".to_string(),
        };

        match validate_request(&request) {
            Err(AppError::InvalidFields(fields)) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, ["name", "password", "profile"]);
                assert!(fields.iter().all(|f| !f.message.is_empty()));
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_becomes_field_error() {
        let err = serde_json::from_str::<CreateUserRequest>(r#"{"email": "mock@mail.com"}"#)
            .unwrap_err();

        match json_payload_error(&JsonPayloadError::Deserialize(err)) {
            AppError::InvalidFields(fields) => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].message, MISSING_FIELD_MESSAGE);
                assert!(!fields[0].field.is_empty());
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_is_validation_error() {
        let err = serde_json::from_str::<CreateUserRequest>("{not json").unwrap_err();

        assert!(matches!(
            json_payload_error(&JsonPayloadError::Deserialize(err)),
            AppError::ValidationError(_)
        ));
        assert!(matches!(
            json_payload_error(&JsonPayloadError::ContentType),
            AppError::ValidationError(_)
        ));
    }

    #[test]
    fn test_missing_field_parses_serde_message() {
        assert_eq!(missing_field("missing field `cpf` at line 1 column 109"), Some("cpf"));
        assert_eq!(missing_field("invalid type: integer `1`, expected a string"), None);
    }
}
