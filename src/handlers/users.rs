//! 사용자 HTTP 핸들러
//!
//! | Method | Path | 성공 응답 |
//! |--------|------|-----------|
//! | POST | `/api/v1/users` | 201 + 공개 뷰 |
//! | GET | `/api/v1/users` | 200 + 공개 뷰 목록 (id 포함) |
//! | GET | `/api/v1/users/{user_id}` | 200 + 공개 뷰 |
//! | PATCH | `/api/v1/users/{user_id}` | 200 + 공개 뷰 |
//! | DELETE | `/api/v1/users/{user_id}` | 204 |
//!
//! 요청 본문은 서비스 호출 전에 `validate_request`로 검증합니다.

use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::validate_request;
use crate::services::users::UserService;

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.find_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.find_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_request(&*payload)?;

    let user = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
