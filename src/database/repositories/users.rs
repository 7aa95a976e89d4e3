use crate::database::client::Db;
use crate::entities::user::{User, TABLE_NAME};
use crate::interfaces::repositories::users::UsersRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug)]
pub struct UsersRepository {
    client: Arc<Db>,
}

impl UsersRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS user_id ON TABLE {TABLE_NAME} TYPE int;
    DEFINE FIELD IF NOT EXISTS username ON TABLE {TABLE_NAME} TYPE string;
    DEFINE FIELD IF NOT EXISTS follow_count ON TABLE {TABLE_NAME} TYPE int DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS follower_count ON TABLE {TABLE_NAME} TYPE int DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS follows ON TABLE {TABLE_NAME} TYPE array<int> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS followers ON TABLE {TABLE_NAME} TYPE array<int> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS publish_list ON TABLE {TABLE_NAME} TYPE array<int> DEFAULT [];
    DEFINE FIELD IF NOT EXISTS favorite_list ON TABLE {TABLE_NAME} TYPE array<int> DEFAULT [];
    DEFINE INDEX IF NOT EXISTS user_user_id_idx ON TABLE {TABLE_NAME} COLUMNS user_id UNIQUE;
    DEFINE INDEX IF NOT EXISTS user_username_idx ON TABLE {TABLE_NAME} COLUMNS username UNIQUE;
");
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}

#[async_trait]
impl UsersRepositoryInterface for UsersRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let user_id = user.user_id;
        let res: Option<User> = self
            .client
            .create((TABLE_NAME, user_id))
            .content(user)
            .await?;
        res.ok_or(AppError::Generic {
            description: format!("user {user_id} was not created"),
        })
    }

    async fn get_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        let res: Option<User> = self.client.select((TABLE_NAME, user_id)).await?;
        Ok(res)
    }

    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let mut res = self
            .client
            .query("SELECT * FROM type::table($tb) WHERE username=$username LIMIT 1;")
            .bind(("tb", TABLE_NAME))
            .bind(("username", username.to_string()))
            .await?;
        let user: Option<User> = res.take(0)?;
        Ok(user)
    }
}
