use crate::database::client::Db;
use crate::database::surrdb_utils::find_thrown;
use crate::entities::user::TABLE_NAME as USER_TABLE_NAME;
use crate::entities::video::TABLE_NAME as VIDEO_TABLE_NAME;
use crate::interfaces::repositories::favorites::FavoritesRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

const NO_USER: &str = "user_id not exist";
const NO_VIDEO: &str = "video_id not exist";

#[derive(Debug)]
pub struct FavoritesRepository {
    client: Arc<Db>,
}

impl FavoritesRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    // Opens the transaction, fails on a missing user or video and binds $liked before
    // `mutation` runs. The count is read back after the commit.
    async fn run_transaction(&self, mutation: &str, user_id: i64, video_id: i64) -> AppResult<i64> {
        let qry = format!(
            "BEGIN TRANSACTION; \
            LET $user_rec = type::thing('{USER_TABLE_NAME}', $user_id); \
            LET $video_rec = type::thing('{VIDEO_TABLE_NAME}', $video_id); \
            IF array::len((SELECT id FROM $user_rec)) = 0 {{ THROW '{NO_USER}' }}; \
            IF array::len((SELECT id FROM $video_rec)) = 0 {{ THROW '{NO_VIDEO}' }}; \
            LET $liked = array::len((SELECT id FROM $video_rec WHERE favorites CONTAINS $user_id)) > 0; \
            {mutation} \
            LET $count = (SELECT VALUE favorite_count FROM ONLY $video_rec); \
            COMMIT TRANSACTION; \
            RETURN $count;"
        );
        let mut res = self
            .client
            .query(qry)
            .bind(("user_id", user_id))
            .bind(("video_id", video_id))
            .await?;

        match find_thrown(&mut res, &[NO_USER, NO_VIDEO]) {
            Ok(None) => {}
            Ok(Some(thrown)) => {
                let ident = if thrown == NO_USER {
                    format!("{USER_TABLE_NAME}:{user_id}")
                } else {
                    format!("{VIDEO_TABLE_NAME}:{video_id}")
                };
                warn!("{thrown}: {ident}");
                return Err(AppError::EntityFailIdNotFound { ident });
            }
            Err(err) => {
                error!("favorite transaction user={user_id} video={video_id} failed: {err}");
                return Err(err.into());
            }
        }

        let count = res.take::<Option<i64>>(res.num_statements() - 1)?;
        Ok(count.unwrap_or(0))
    }
}

#[async_trait]
impl FavoritesRepositoryInterface for FavoritesRepository {
    async fn like(&self, user_id: i64, video_id: i64) -> AppResult<i64> {
        let mutation = "UPDATE $user_rec SET favorite_list = array::concat(favorite_list, array::complement([$video_id], favorite_list)); \
            IF $liked = false { \
                UPDATE $video_rec SET favorites += $user_id, favorite_count += 1; \
            };";
        self.run_transaction(mutation, user_id, video_id).await
    }

    async fn unlike(&self, user_id: i64, video_id: i64) -> AppResult<i64> {
        let mutation = "UPDATE $user_rec SET favorite_list = array::complement(favorite_list, [$video_id]); \
            UPDATE $video_rec SET favorites = array::complement(favorites, [$user_id]); \
            IF $liked { \
                UPDATE $video_rec SET favorite_count = math::max([favorite_count - 1, 0]); \
            };";
        self.run_transaction(mutation, user_id, video_id).await
    }
}
