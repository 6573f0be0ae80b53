use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::models::moods::{Mood, MoodReactions, MoodWithComments, SubmitMoodArgs};
use crate::models::{CreatedResponse, MessageResponse};
use crate::usecases::moods;
use axum::Json;
use axum::extract::Path;
use axum::http::StatusCode;

pub async fn submit(
    ctx: RequestContext,
    Json(args): Json<SubmitMoodArgs>,
) -> ServiceResult<(StatusCode, Json<CreatedResponse>)> {
    let id = moods::submit(&ctx, args).await?;
    let response = CreatedResponse {
        message: "Mood submitted successfully",
        id,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn history(ctx: RequestContext, Path(user_id): Path<String>) -> ServiceResponse<Vec<Mood>> {
    let moods = moods::fetch_history(&ctx, &user_id).await?;
    Ok(Json(moods))
}

pub async fn all(ctx: RequestContext) -> ServiceResponse<Vec<MoodWithComments>> {
    let moods = moods::fetch_all_with_comments(&ctx).await?;
    Ok(Json(moods))
}

pub async fn react(
    ctx: RequestContext,
    Path(mood_id): Path<String>,
    Json(reactions): Json<MoodReactions>,
) -> ServiceResponse<MessageResponse> {
    moods::react(&ctx, &mood_id, reactions).await?;
    Ok(Json(MessageResponse::new("Mood updated successfully")))
}
