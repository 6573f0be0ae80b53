use crate::entities::comments::Comment as CommentEntity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Comment {
    pub id: String,
    pub mood_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<CommentEntity> for Comment {
    fn from(value: CommentEntity) -> Self {
        Self {
            id: value.id,
            mood_id: value.mood_id,
            user_id: value.user_id,
            content: value.content,
            timestamp: value.timestamp,
        }
    }
}

#[derive(Deserialize)]
pub struct AddCommentArgs {
    pub mood_id: Option<String>,
    pub user_id: Option<String>,
    pub content: Option<String>,
}
