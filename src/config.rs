use dotenvy;

use crate::database::client::DbConfig;
use crate::middleware::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_namespace: String,
    pub db_database: String,
    pub db_password: Option<String>,
    pub db_username: Option<String>,
    pub db_url: String,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();
        let db_namespace = std::env::var("DB_NAMESPACE").unwrap_or("namespace".to_string());
        let db_database = std::env::var("DB_DATABASE").unwrap_or("database".to_string());
        let db_password = std::env::var("DB_PASSWORD").ok();
        let db_username = std::env::var("DB_USERNAME").ok();
        let db_url = std::env::var("DB_URL").map_err(|_| AppError::Generic {
            description: "Missing DB_URL in env".to_string(),
        })?;

        Ok(Self {
            db_namespace,
            db_database,
            db_password,
            db_username,
            db_url,
        })
    }

    pub fn db_config(&self) -> DbConfig<'_> {
        DbConfig {
            url: &self.db_url,
            database: &self.db_database,
            namespace: &self.db_namespace,
            username: self.db_username.as_deref(),
            password: self.db_password.as_deref(),
        }
    }
}
