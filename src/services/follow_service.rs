use futures::future::try_join_all;
use tracing::{info, warn};

use crate::{
    entities::user::User,
    interfaces::repositories::{
        follows::FollowsRepositoryInterface, users::UsersRepositoryInterface,
    },
    middleware::error::AppResult,
    services::user_service::UserService,
};

pub struct FollowService<'a, F, U>
where
    F: FollowsRepositoryInterface,
    U: UsersRepositoryInterface,
{
    follows_repository: &'a F,
    users_repository: &'a U,
}

impl<'a, F, U> FollowService<'a, F, U>
where
    F: FollowsRepositoryInterface,
    U: UsersRepositoryInterface,
{
    pub fn new(follows_repository: &'a F, users_repository: &'a U) -> Self {
        Self {
            follows_repository,
            users_repository,
        }
    }

    pub async fn change_follow_relation(&self, followee: i64, follower: i64) -> AppResult<()> {
        self.follows_repository.follow(followee, follower).await?;
        info!("user {follower} follows {followee}");
        Ok(())
    }

    pub async fn remove_follow_relation(&self, followee: i64, follower: i64) -> AppResult<()> {
        self.follows_repository.unfollow(followee, follower).await?;
        info!("user {follower} unfollowed {followee}");
        Ok(())
    }

    pub async fn is_following(&self, follower: i64, followee: i64) -> AppResult<bool> {
        self.follows_repository.is_following(follower, followee).await
    }

    pub async fn user_followers(&self, user_id: i64) -> AppResult<Vec<User>> {
        let user = UserService::new(self.users_repository)
            .query_user_by_id(user_id)
            .await?;
        self.resolve_users(user.followers).await
    }

    pub async fn user_following(&self, user_id: i64) -> AppResult<Vec<User>> {
        let user = UserService::new(self.users_repository)
            .query_user_by_id(user_id)
            .await?;
        self.resolve_users(user.follows).await
    }

    async fn resolve_users(&self, ids: Vec<i64>) -> AppResult<Vec<User>> {
        let users = try_join_all(ids.iter().map(|id| self.users_repository.get_by_id(*id))).await?;
        Ok(ids
            .into_iter()
            .zip(users)
            .filter_map(|(id, user)| {
                if user.is_none() {
                    warn!("followed user {id} no longer exists");
                }
                user
            })
            .collect())
    }
}
