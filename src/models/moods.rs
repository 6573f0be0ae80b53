use crate::entities::moods::Mood as MoodEntity;
use crate::models::comments::Comment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Mood {
    pub id: String,
    pub user_id: String,
    pub emotion: String,
    pub context: Option<String>,
    pub date: String,
    pub supports: i64,
    pub ripples: i64,
}

impl From<MoodEntity> for Mood {
    fn from(value: MoodEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            emotion: value.emotion,
            context: value.context,
            date: value.date,
            supports: value.supports,
            ripples: value.ripples,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MoodWithComments {
    #[serde(flatten)]
    pub mood: Mood,
    pub comments: Vec<Comment>,
}

#[derive(Deserialize)]
pub struct SubmitMoodArgs {
    pub user_id: Option<String>,
    pub emotion: Option<String>,
    pub context: Option<String>,
    pub date: Option<String>,
}

/// Deltas added to the engagement counters of a mood.
#[derive(Debug, Default, Deserialize)]
pub struct MoodReactions {
    #[serde(default)]
    pub supports: i64,
    #[serde(default)]
    pub ripples: i64,
}
