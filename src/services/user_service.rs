use crate::{
    database::surrdb_utils::with_not_found_err,
    entities::user::{User, TABLE_NAME},
    interfaces::repositories::users::UsersRepositoryInterface,
    middleware::error::AppResult,
};

pub struct UserService<'a, U>
where
    U: UsersRepositoryInterface,
{
    users_repository: &'a U,
}

impl<'a, U> UserService<'a, U>
where
    U: UsersRepositoryInterface,
{
    pub fn new(users_repository: &'a U) -> Self {
        Self { users_repository }
    }

    pub async fn create_user(&self, user: User) -> AppResult<User> {
        self.users_repository.create(user).await
    }

    pub async fn query_user_by_id(&self, user_id: i64) -> AppResult<User> {
        let user = self.users_repository.get_by_id(user_id).await?;
        with_not_found_err(user, &format!("{TABLE_NAME}:{user_id}"))
    }

    /// Looks a user up by the unique username the request token carries.
    pub async fn query_user_by_token(&self, token: &str) -> AppResult<User> {
        let user = self.users_repository.get_by_username(token).await?;
        with_not_found_err(user, &format!("{TABLE_NAME} username={token}"))
    }
}
