use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Comment {
    pub id: String,
    pub mood_id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
