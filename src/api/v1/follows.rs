use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::fields::required;
use crate::models::MessageResponse;
use crate::models::follows::{
    FollowArgs, FollowStatusResponse, FollowUser, IsFollowingResponse, PendingRequest,
};
use crate::usecases::follows;
use axum::Json;
use axum::extract::Path;

pub async fn request_follow(
    ctx: RequestContext,
    Json(args): Json<FollowArgs>,
) -> ServiceResponse<MessageResponse> {
    let follower_id = required(args.follower_id)?;
    let followed_id = required(args.followed_id)?;
    follows::request_follow(&ctx, &follower_id, &followed_id).await?;
    Ok(Json(MessageResponse::new("Follow request sent")))
}

pub async fn unfollow(
    ctx: RequestContext,
    Json(args): Json<FollowArgs>,
) -> ServiceResponse<MessageResponse> {
    let follower_id = required(args.follower_id)?;
    let followed_id = required(args.followed_id)?;
    follows::unfollow(&ctx, &follower_id, &followed_id).await?;
    Ok(Json(MessageResponse::new("Unfollowed successfully")))
}

pub async fn accept_follow(
    ctx: RequestContext,
    Path((follower_id, followed_id)): Path<(String, String)>,
) -> ServiceResponse<MessageResponse> {
    follows::accept_follow(&ctx, &follower_id, &followed_id).await?;
    Ok(Json(MessageResponse::new("Follow request accepted")))
}

pub async fn is_following(
    ctx: RequestContext,
    Path((follower_id, followed_id)): Path<(String, String)>,
) -> ServiceResponse<IsFollowingResponse> {
    let is_following = follows::is_following(&ctx, &follower_id, &followed_id).await?;
    Ok(Json(IsFollowingResponse { is_following }))
}

pub async fn follow_status(
    ctx: RequestContext,
    Path((follower_id, followed_id)): Path<(String, String)>,
) -> ServiceResponse<FollowStatusResponse> {
    let status = follows::follow_status(&ctx, &follower_id, &followed_id).await?;
    Ok(Json(FollowStatusResponse { status }))
}

pub async fn pending_requests(
    ctx: RequestContext,
    Path(user_id): Path<String>,
) -> ServiceResponse<Vec<PendingRequest>> {
    let requests = follows::pending_requests(&ctx, &user_id).await?;
    Ok(Json(requests))
}

pub async fn followers(
    ctx: RequestContext,
    Path(user_id): Path<String>,
) -> ServiceResponse<Vec<FollowUser>> {
    let followers = follows::followers(&ctx, &user_id).await?;
    Ok(Json(followers))
}

pub async fn following(
    ctx: RequestContext,
    Path(user_id): Path<String>,
) -> ServiceResponse<Vec<FollowUser>> {
    let following = follows::following(&ctx, &user_id).await?;
    Ok(Json(following))
}
