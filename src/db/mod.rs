//! MongoDB 연결 관리
//!
//! [`StorageConfig`]의 URI와 데이터베이스 이름으로 클라이언트를 만들고,
//! `ping` 명령으로 연결을 확인합니다.

use log::info;
use mongodb::{options::ClientOptions, Client};

use crate::config::StorageConfig;

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 연결합니다.
    pub async fn connect() -> Result<Self, mongodb::error::Error> {
        Self::connect_with(&StorageConfig::mongodb_uri(), StorageConfig::database_name()).await
    }

    pub async fn connect_with(
        mongodb_uri: &str,
        database_name: String,
    ) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(mongodb_uri).await?;

        // 모니터링에 표시될 애플리케이션 이름
        client_options.app_name = Some("user_account_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
