use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub const TABLE_NAME: &str = "user";

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: i64,
    pub username: String,
    pub follow_count: i64,
    pub follower_count: i64,
    pub follows: Vec<i64>,
    pub followers: Vec<i64>,
    pub publish_list: Vec<i64>,
    pub favorite_list: Vec<i64>,
}

impl User {
    pub fn new(user_id: i64, username: String) -> Self {
        User {
            id: None,
            user_id,
            username,
            ..Default::default()
        }
    }
}
