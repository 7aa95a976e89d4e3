use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub const TABLE_NAME: &str = "video";

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Video {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub video_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    pub favorite_count: i64,
    pub favorites: Vec<i64>,
}

impl Video {
    pub fn new(video_id: i64) -> Self {
        Video {
            id: None,
            video_id,
            ..Default::default()
        }
    }
}
