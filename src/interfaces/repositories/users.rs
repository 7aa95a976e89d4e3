use crate::{entities::user::User, middleware::error::AppResult};
use async_trait::async_trait;

#[async_trait]
pub trait UsersRepositoryInterface {
    async fn create(&self, user: User) -> AppResult<User>;
    async fn get_by_id(&self, user_id: i64) -> AppResult<Option<User>>;
    async fn get_by_username(&self, username: &str) -> AppResult<Option<User>>;
}
