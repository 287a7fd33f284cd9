//! 라우트 구성
//!
//! ```text
//! /health                      GET
//! /api/v1/users                POST, GET
//! /api/v1/users/{user_id}      GET, PATCH, DELETE
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::dto::json_payload_error;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 본문 역직렬화 실패도 JSON 검증 오류로 응답
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _req| json_payload_error(&err).into()),
    );

    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "user_account_service");
    }
}
