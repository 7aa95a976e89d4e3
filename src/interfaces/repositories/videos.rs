use crate::{entities::video::Video, middleware::error::AppResult};
use async_trait::async_trait;

#[async_trait]
pub trait VideosRepositoryInterface {
    async fn create(&self, video: Video) -> AppResult<Video>;
    async fn get_by_id(&self, video_id: i64) -> AppResult<Option<Video>>;
}
