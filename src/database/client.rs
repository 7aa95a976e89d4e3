use std::sync::Arc;

use surrealdb::engine::any::{connect, Any};
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;
use tracing::info;

use crate::middleware::error::AppResult;

use super::repositories::favorites::FavoritesRepository;
use super::repositories::follows::FollowsRepository;
use super::repositories::users::UsersRepository;
use super::repositories::videos::VideosRepository;

pub type Db = Surreal<Any>;

#[derive(Debug)]
pub struct DbConfig<'a> {
    pub url: &'a str,
    pub database: &'a str,
    pub namespace: &'a str,
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
}

#[derive(Debug)]
pub struct Database {
    pub client: Arc<Db>,
    pub users: UsersRepository,
    pub videos: VideosRepository,
    pub follows: FollowsRepository,
    pub favorites: FavoritesRepository,
}

impl Database {
    pub async fn connect(config: DbConfig<'_>) -> AppResult<Self> {
        info!("->> connecting DB url={} ns={} db={}", config.url, config.namespace, config.database);
        let conn = connect(config.url).await?;

        if let (Some(password), Some(username)) = (config.password, config.username) {
            conn.signin(Root { username, password }).await?;
        }

        conn.use_ns(config.namespace)
            .use_db(config.database)
            .await?;

        let version = conn.version().await?;
        info!("->> connected DB version: {version}");

        let client = Arc::new(conn);
        Ok(Self {
            users: UsersRepository::new(client.clone()),
            videos: VideosRepository::new(client.clone()),
            follows: FollowsRepository::new(client.clone()),
            favorites: FavoritesRepository::new(client.clone()),
            client,
        })
    }

    pub async fn define_schema(&self) -> AppResult<()> {
        self.users.mutate_db().await?;
        self.videos.mutate_db().await?;
        info!("->> schema defined");
        Ok(())
    }
}
