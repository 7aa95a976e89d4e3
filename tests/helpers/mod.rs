#[macro_use]
pub mod test_with_db;

use fake::{faker::internet::en::Username, Fake};
use vidsocial_dal::database::client::Database;
use vidsocial_dal::entities::{user::User, video::Video};
use vidsocial_dal::interfaces::repositories::{
    users::UsersRepositoryInterface, videos::VideosRepositoryInterface,
};

#[allow(dead_code)]
pub async fn create_fake_user(db: &Database, user_id: i64) -> User {
    let username: String = Username().fake();
    db.users
        .create(User::new(user_id, format!("{username}_{user_id}")))
        .await
        .expect("user created")
}

#[allow(dead_code)]
pub async fn create_video(db: &Database, video_id: i64, favorite_count: i64) -> Video {
    db.videos
        .create(Video {
            favorite_count,
            title: Some(format!("video {video_id}")),
            ..Video::new(video_id)
        })
        .await
        .expect("video created")
}

#[allow(dead_code)]
pub async fn get_user(db: &Database, user_id: i64) -> User {
    db.users
        .get_by_id(user_id)
        .await
        .expect("user query")
        .expect("user exists")
}

#[allow(dead_code)]
pub async fn get_video(db: &Database, video_id: i64) -> Video {
    db.videos
        .get_by_id(video_id)
        .await
        .expect("video query")
        .expect("video exists")
}
