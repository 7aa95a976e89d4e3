use crate::middleware::error::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait FavoritesRepositoryInterface {
    /// Returns the favorite count of the video after the change.
    async fn like(&self, user_id: i64, video_id: i64) -> AppResult<i64>;
    async fn unlike(&self, user_id: i64, video_id: i64) -> AppResult<i64>;
}
