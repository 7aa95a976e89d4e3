use crate::{
    database::surrdb_utils::with_not_found_err,
    entities::video::{Video, TABLE_NAME},
    interfaces::repositories::videos::VideosRepositoryInterface,
    middleware::error::AppResult,
};

pub struct VideoService<'a, V>
where
    V: VideosRepositoryInterface,
{
    videos_repository: &'a V,
}

impl<'a, V> VideoService<'a, V>
where
    V: VideosRepositoryInterface,
{
    pub fn new(videos_repository: &'a V) -> Self {
        Self { videos_repository }
    }

    pub async fn create_video(&self, video: Video) -> AppResult<Video> {
        self.videos_repository.create(video).await
    }

    pub async fn find_video_by_id(&self, video_id: i64) -> AppResult<Option<Video>> {
        self.videos_repository.get_by_id(video_id).await
    }

    pub async fn query_video_by_id(&self, video_id: i64) -> AppResult<Video> {
        let video = self.videos_repository.get_by_id(video_id).await?;
        with_not_found_err(video, &format!("{TABLE_NAME}:{video_id}"))
    }
}
