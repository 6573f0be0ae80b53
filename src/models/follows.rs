use crate::common::error::AppError;
use serde::{Deserialize, Serialize};

/// Stored state of a follow edge. An absent edge has no status.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FollowStatus {
    Pending,
    Accepted,
}

impl FollowStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            FollowStatus::Pending => "pending",
            FollowStatus::Accepted => "accepted",
        }
    }
}

impl TryFrom<&str> for FollowStatus {
    type Error = AppError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(FollowStatus::Pending),
            "accepted" => Ok(FollowStatus::Accepted),
            _ => Err(AppError::InternalServerError("invalid follow status")),
        }
    }
}

/// The relationship between an ordered pair of users as seen by callers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowState {
    Pending,
    Accepted,
    NotFollowing,
}

impl From<Option<FollowStatus>> for FollowState {
    fn from(value: Option<FollowStatus>) -> Self {
        match value {
            None => FollowState::NotFollowing,
            Some(FollowStatus::Pending) => FollowState::Pending,
            Some(FollowStatus::Accepted) => FollowState::Accepted,
        }
    }
}

#[derive(Deserialize)]
pub struct FollowArgs {
    pub follower_id: Option<String>,
    pub followed_id: Option<String>,
}

#[derive(Serialize)]
pub struct IsFollowingResponse {
    pub is_following: bool,
}

#[derive(Serialize)]
pub struct FollowStatusResponse {
    pub status: FollowState,
}

#[derive(Debug, Serialize)]
pub struct PendingRequest {
    pub follower_id: String,
}

#[derive(Debug, Serialize)]
pub struct FollowUser {
    pub username: String,
}
