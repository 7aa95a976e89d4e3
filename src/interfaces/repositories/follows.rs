use crate::middleware::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait FollowsRepositoryInterface {
    /// Adds `follower` to the followers of `followee` and `followee` to the follows of
    /// `follower` in one transaction.
    async fn follow(&self, followee: i64, follower: i64) -> AppResult<()>;
    async fn unfollow(&self, followee: i64, follower: i64) -> AppResult<()>;
    async fn is_following(&self, follower: i64, followee: i64) -> AppResult<bool>;
}
