use crate::database::client::Db;
use crate::database::surrdb_utils::find_thrown;
use crate::entities::user::TABLE_NAME as USER_TABLE_NAME;
use crate::interfaces::repositories::follows::FollowsRepositoryInterface;
use crate::middleware::error::{AppError, AppResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

const FOLLOW_AGAIN: &str = "follow again";
const NO_FOLLOWEE: &str = "no followee was found";
const NO_FOLLOWER: &str = "no follower was found";
const NOT_FOLLOWING: &str = "not following";

#[derive(Debug)]
pub struct FollowsRepository {
    client: Arc<Db>,
}

impl FollowsRepository {
    pub fn new(client: Arc<Db>) -> Self {
        Self { client }
    }

    async fn run_transaction(&self, qry: String, followee: i64, follower: i64) -> AppResult<()> {
        let mut res = self
            .client
            .query(qry)
            .bind(("followee", followee))
            .bind(("follower", follower))
            .await?;

        match find_thrown(&mut res, &[FOLLOW_AGAIN, NO_FOLLOWEE, NO_FOLLOWER, NOT_FOLLOWING]) {
            Ok(None) => Ok(()),
            Ok(Some(FOLLOW_AGAIN)) => {
                warn!("user {follower} already follows {followee}");
                Err(AppError::DuplicateRelation {
                    description: FOLLOW_AGAIN.to_string(),
                })
            }
            Ok(Some(NOT_FOLLOWING)) => {
                warn!("user {follower} does not follow {followee}");
                Err(AppError::EntityFailIdNotFound {
                    ident: format!("{USER_TABLE_NAME}:{follower}->{USER_TABLE_NAME}:{followee}"),
                })
            }
            Ok(Some(thrown)) => {
                let missing = if thrown == NO_FOLLOWEE { followee } else { follower };
                warn!("{thrown}: {USER_TABLE_NAME}:{missing}");
                Err(AppError::EntityFailIdNotFound {
                    ident: format!("{USER_TABLE_NAME}:{missing}"),
                })
            }
            Err(err) => {
                error!("follow transaction {follower}->{followee} failed: {err}");
                Err(err.into())
            }
        }
    }
}

#[async_trait]
impl FollowsRepositoryInterface for FollowsRepository {
    async fn follow(&self, followee: i64, follower: i64) -> AppResult<()> {
        let qry = format!(
            "BEGIN TRANSACTION; \
            LET $followee_rec = type::thing('{USER_TABLE_NAME}', $followee); \
            LET $follower_rec = type::thing('{USER_TABLE_NAME}', $follower); \
            IF array::len((SELECT id FROM $followee_rec WHERE followers CONTAINS $follower)) > 0 {{ THROW '{FOLLOW_AGAIN}' }}; \
            LET $updated = (UPDATE $followee_rec SET follower_count += 1, followers += $follower); \
            IF array::len($updated) = 0 {{ THROW '{NO_FOLLOWEE}' }}; \
            LET $updated = (UPDATE $follower_rec SET follow_count += 1, follows = array::concat(follows, array::complement([$followee], follows))); \
            IF array::len($updated) = 0 {{ THROW '{NO_FOLLOWER}' }}; \
            COMMIT TRANSACTION;"
        );
        self.run_transaction(qry, followee, follower).await
    }

    async fn unfollow(&self, followee: i64, follower: i64) -> AppResult<()> {
        let qry = format!(
            "BEGIN TRANSACTION; \
            LET $followee_rec = type::thing('{USER_TABLE_NAME}', $followee); \
            LET $follower_rec = type::thing('{USER_TABLE_NAME}', $follower); \
            IF array::len((SELECT id FROM $followee_rec)) = 0 {{ THROW '{NO_FOLLOWEE}' }}; \
            IF array::len((SELECT id FROM $followee_rec WHERE followers CONTAINS $follower)) = 0 {{ THROW '{NOT_FOLLOWING}' }}; \
            UPDATE $followee_rec SET follower_count = math::max([follower_count - 1, 0]), followers = array::complement(followers, [$follower]); \
            LET $updated = (UPDATE $follower_rec SET follow_count = math::max([follow_count - 1, 0]), follows = array::complement(follows, [$followee])); \
            IF array::len($updated) = 0 {{ THROW '{NO_FOLLOWER}' }}; \
            COMMIT TRANSACTION;"
        );
        self.run_transaction(qry, followee, follower).await
    }

    async fn is_following(&self, follower: i64, followee: i64) -> AppResult<bool> {
        let qry = format!(
            "RETURN array::len((SELECT id FROM type::thing('{USER_TABLE_NAME}', $followee) WHERE followers CONTAINS $follower)) > 0;"
        );
        let mut res = self
            .client
            .query(qry)
            .bind(("followee", followee))
            .bind(("follower", follower))
            .await?;
        let res: Option<bool> = res.take(0)?;
        Ok(res.unwrap_or(false))
    }
}
