//! Follow relationships between users.
//!
//! Every ordered pair `(follower, followed)` moves through
//! `not_following -> pending -> accepted`, and `unfollow` returns it to
//! `not_following` from either state. Each transition is a single statement, so the
//! database decides races: a duplicate request hits the primary key and a second
//! accept matches no pending row.

use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::follows::{FollowState, FollowStatus, FollowUser, PendingRequest};
use crate::repositories::follows;
use crate::usecases::users;
use tracing::{info, warn};

pub async fn request_follow<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
) -> ServiceResult<()> {
    if follower_id == followed_id {
        warn!(follower_id, "User tried to follow themselves");
        return Err(AppError::FollowsSelfFollow);
    }
    users::ensure_exists(ctx, follower_id).await?;
    users::ensure_exists(ctx, followed_id).await?;

    match follows::create(ctx, follower_id, followed_id).await {
        Ok(()) => {
            info!(follower_id, followed_id, "Follow requested");
            Ok(())
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(AppError::FollowsAlreadyRelated)
        }
        // a user removed between the existence check and the insert
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            Err(AppError::UsersNotFound)
        }
        Err(sqlx::Error::Database(e)) if e.is_check_violation() => {
            Err(AppError::FollowsSelfFollow)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn accept_follow<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
) -> ServiceResult<()> {
    let updated = match follows::update_status(
        ctx,
        follower_id,
        followed_id,
        FollowStatus::Pending,
        FollowStatus::Accepted,
    )
    .await
    {
        Ok(updated) => updated,
        Err(e) => return unexpected(e),
    };
    if updated == 0 {
        return Err(AppError::FollowsNoPendingRequest);
    }
    info!(follower_id, followed_id, "Follow request accepted");
    Ok(())
}

/// Removes the edge whatever its state. Withdrawing a request, declining one and
/// ending an accepted follow are all the same operation.
pub async fn unfollow<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
) -> ServiceResult<()> {
    match follows::delete(ctx, follower_id, followed_id).await {
        Ok(0) => Ok(()),
        Ok(_) => {
            info!(follower_id, followed_id, "Follow removed");
            Ok(())
        }
        Err(e) => unexpected(e),
    }
}

pub async fn follow_status<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
) -> ServiceResult<FollowState> {
    let status = match follows::fetch_one(ctx, follower_id, followed_id).await {
        Ok(Some(follow)) => Some(FollowStatus::try_from(follow.status.as_str())?),
        Ok(None) => None,
        Err(e) => return unexpected(e),
    };
    Ok(FollowState::from(status))
}

pub async fn is_following<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
) -> ServiceResult<bool> {
    let state = follow_status(ctx, follower_id, followed_id).await?;
    Ok(matches!(state, FollowState::Accepted))
}

pub async fn pending_requests<C: Context>(
    ctx: &C,
    user_id: &str,
) -> ServiceResult<Vec<PendingRequest>> {
    match follows::fetch_pending_follower_ids(ctx, user_id).await {
        Ok(follower_ids) => Ok(follower_ids
            .into_iter()
            .map(|follower_id| PendingRequest { follower_id })
            .collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn followers<C: Context>(ctx: &C, user_id: &str) -> ServiceResult<Vec<FollowUser>> {
    match follows::fetch_follower_usernames(ctx, user_id).await {
        Ok(usernames) => Ok(usernames
            .into_iter()
            .map(|username| FollowUser { username })
            .collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn following<C: Context>(ctx: &C, user_id: &str) -> ServiceResult<Vec<FollowUser>> {
    match follows::fetch_following_usernames(ctx, user_id).await {
        Ok(usernames) => Ok(usernames
            .into_iter()
            .map(|username| FollowUser { username })
            .collect()),
        Err(e) => unexpected(e),
    }
}
