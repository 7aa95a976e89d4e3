use futures::future::try_join_all;
use strum::Display;
use tracing::{info, warn};

use crate::{
    entities::video::Video,
    interfaces::repositories::{
        favorites::FavoritesRepositoryInterface, users::UsersRepositoryInterface,
        videos::VideosRepositoryInterface,
    },
    middleware::error::AppResult,
    services::{user_service::UserService, video_service::VideoService},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FavoriteActionType {
    Like,
    Unlike,
}

impl From<i32> for FavoriteActionType {
    fn from(value: i32) -> Self {
        match value {
            1 => FavoriteActionType::Like,
            _ => FavoriteActionType::Unlike,
        }
    }
}

pub struct FavoriteService<'a, F, U, V>
where
    F: FavoritesRepositoryInterface,
    U: UsersRepositoryInterface,
    V: VideosRepositoryInterface,
{
    favorites_repository: &'a F,
    users_repository: &'a U,
    videos_repository: &'a V,
}

impl<'a, F, U, V> FavoriteService<'a, F, U, V>
where
    F: FavoritesRepositoryInterface,
    U: UsersRepositoryInterface,
    V: VideosRepositoryInterface,
{
    pub fn new(favorites_repository: &'a F, users_repository: &'a U, videos_repository: &'a V) -> Self {
        Self {
            favorites_repository,
            users_repository,
            videos_repository,
        }
    }

    /// Likes the video when `action_type` is 1 and removes the like for any other value.
    /// Returns the favorite count of the video afterwards.
    pub async fn favorite_action(&self, user_id: i64, video_id: i64, action_type: i32) -> AppResult<i64> {
        let action = FavoriteActionType::from(action_type);
        let count = match action {
            FavoriteActionType::Like => self.favorites_repository.like(user_id, video_id).await?,
            FavoriteActionType::Unlike => self.favorites_repository.unlike(user_id, video_id).await?,
        };
        info!("{action} user={user_id} video={video_id} favorite_count={count}");
        Ok(count)
    }

    /// Each id of the user's favorite list, in like order, paired with its video or
    /// `None` when the video no longer exists.
    pub async fn get_favorite_entries(&self, user_id: i64) -> AppResult<Vec<(i64, Option<Video>)>> {
        let user = UserService::new(self.users_repository)
            .query_user_by_id(user_id)
            .await?;
        let video_service = VideoService::new(self.videos_repository);
        let videos = try_join_all(
            user.favorite_list
                .iter()
                .map(|id| video_service.find_video_by_id(*id)),
        )
        .await?;

        Ok(user.favorite_list.into_iter().zip(videos).collect())
    }

    /// Videos liked by the user in like order. Ids whose video no longer exists are left
    /// out and logged; use `get_favorite_entries` to see which ones.
    pub async fn get_favorite_list(&self, user_id: i64) -> AppResult<Vec<Video>> {
        let entries = self.get_favorite_entries(user_id).await?;
        Ok(entries
            .into_iter()
            .filter_map(|(id, video)| {
                if video.is_none() {
                    warn!("favorite video {id} of user {user_id} not found");
                }
                video
            })
            .collect())
    }
}
