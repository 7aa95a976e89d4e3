use crate::database::client::Db;
use crate::entities::video::{Video, TABLE_NAME};
use crate::interfaces::repositories::videos::VideosRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug)]
pub struct VideosRepository {
    client: Arc<Db>,
}

impl VideosRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    pub(in crate::database) async fn mutate_db(&self) -> Result<(), AppError> {
        let sql = format!("
    DEFINE TABLE IF NOT EXISTS {TABLE_NAME} SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS video_id ON TABLE {TABLE_NAME} TYPE int;
    DEFINE FIELD IF NOT EXISTS author_id ON TABLE {TABLE_NAME} TYPE option<int>;
    DEFINE FIELD IF NOT EXISTS title ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS play_url ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS cover_url ON TABLE {TABLE_NAME} TYPE option<string>;
    DEFINE FIELD IF NOT EXISTS favorite_count ON TABLE {TABLE_NAME} TYPE int DEFAULT 0;
    DEFINE FIELD IF NOT EXISTS favorites ON TABLE {TABLE_NAME} TYPE array<int> DEFAULT [];
    DEFINE INDEX IF NOT EXISTS video_video_id_idx ON TABLE {TABLE_NAME} COLUMNS video_id UNIQUE;
");
        self.client.query(sql).await?.check()?;
        Ok(())
    }
}

#[async_trait]
impl VideosRepositoryInterface for VideosRepository {
    async fn create(&self, video: Video) -> AppResult<Video> {
        let video_id = video.video_id;
        let res: Option<Video> = self
            .client
            .create((TABLE_NAME, video_id))
            .content(video)
            .await?;
        res.ok_or(AppError::Generic {
            description: format!("video {video_id} was not created"),
        })
    }

    async fn get_by_id(&self, video_id: i64) -> AppResult<Option<Video>> {
        let res: Option<Video> = self.client.select((TABLE_NAME, video_id)).await?;
        Ok(res)
    }
}
