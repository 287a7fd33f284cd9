//! # Application Error Handling System
//!
//! 사용자 계정 서비스 전역에서 사용하는 도메인 에러 체계입니다.
//! 서비스 계층은 저장소/해싱 단계에서 발생한 모든 실패를 이 열거형 중 하나로
//! 분류한 뒤에만 경계(HTTP 핸들러)로 전달합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 프로필 값 등 단일 입력 오류 |
//! | `InvalidFields` | 400 Bad Request | 요청 DTO 필드 단위 검증 실패 |
//! | `NotFound` | 404 Not Found | 사용자 없음, 등록된 사용자 없음 |
//! | `Conflict` | 409 Conflict | cpf / username / email 중복 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 실패 (영속화 실패) |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패 등 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: 사용자를 찾을 수 없습니다" }
//! { "error": "Validation error: ...", "fields": [{ "field": "cpf", "message": "..." }] }
//! { "error": "Conflict error: CPF가 이미 사용 중입니다", "field": "cpf" }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::users::UniqueField;

/// 필드 단위 검증 실패 항목
///
/// `validator::ValidationErrors`를 평탄화한 결과이며, 400 응답의 `fields`
/// 배열로 그대로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// `thiserror`로 `Error`를 구현하고, `actix_web::ResponseError`를 구현하여
/// 핸들러에서 `?`만으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 단일 입력값 검증 에러 (400)
    ///
    /// 경계의 DTO 검증을 통과했더라도 서비스가 다시 확인해야 하는 값
    /// (예: 인식할 수 없는 프로필)에 사용합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청 DTO의 필드 단위 검증 에러 (400)
    #[error("Validation error: {} field(s) rejected", .0.len())]
    InvalidFields(Vec<FieldError>),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 (409)
    ///
    /// 충돌한 필드를 타입으로 보존하므로 메시지 문자열을 다시 해석할
    /// 필요가 없습니다.
    #[error("Conflict error: {}", .field.conflict_message())]
    Conflict { field: UniqueField },

    /// 영속화 실패 (500)
    ///
    /// 유니크 제약 위반이 아닌 모든 저장소 오류입니다. 메시지는 사용자에게
    /// 노출되는 문구만 담고, 원본 오류는 로그로만 남깁니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 응답은 `error` 키를 가지며, 필드 검증 실패와 충돌은 각각
    /// `fields`, `field` 키를 추가로 가집니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::InvalidFields(fields) => serde_json::json!({
                "error": self.to_string(),
                "fields": fields,
            }),
            AppError::Conflict { field } => serde_json::json!({
                "error": self.to_string(),
                "field": field.as_str(),
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hashed = bcrypt::hash_with_salt(password, cost, salt)
///     .context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("알 수 없는 프로필입니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::Conflict { field: UniqueField::Cpf };

        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
        assert!(error.to_string().contains("CPF"));
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("사용자 저장 실패".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_invalid_fields_body_lists_each_field() {
        let error = AppError::InvalidFields(vec![
            FieldError::new("cpf", "유효한 CPF를 입력해주세요"),
            FieldError::new("email", "유효한 이메일 주소를 입력해주세요"),
        ]);

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["fields"].as_array().unwrap().len(), 2);
        assert_eq!(body["fields"][0]["field"], "cpf");
    }

    #[actix_web::test]
    async fn test_conflict_body_names_field() {
        let response = AppError::Conflict { field: UniqueField::Username }.error_response();

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["field"], "username");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
