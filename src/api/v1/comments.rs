use crate::api::RequestContext;
use crate::common::error::ServiceResult;
use crate::models::CreatedResponse;
use crate::models::comments::AddCommentArgs;
use crate::usecases::comments;
use axum::Json;
use axum::http::StatusCode;

pub async fn add(
    ctx: RequestContext,
    Json(args): Json<AddCommentArgs>,
) -> ServiceResult<(StatusCode, Json<CreatedResponse>)> {
    let comment = comments::add_from_args(&ctx, args).await?;
    let response = CreatedResponse {
        message: "Comment added successfully",
        id: comment.id,
    };
    Ok((StatusCode::CREATED, Json(response)))
}
