use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repository::entities::HeroId;

/// A visitor comment attached to one hero record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub hero_id: HeroId,
    pub username: String,
    pub message: String,
    pub likes: u32,
    pub posted_at: DateTime<Utc>,
}

impl Comment {
    pub(crate) fn new(id: String, hero_id: HeroId, username: &str, message: &str) -> Self {
        Self {
            id,
            hero_id,
            username: username.to_string(),
            message: message.to_string(),
            likes: 0,
            posted_at: Utc::now(),
        }
    }
}
