use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::models::MessageResponse;
use crate::models::users::{ForgotPasswordArgs, LoginArgs, RegisterArgs, UserIdResponse};
use crate::usecases::users;
use axum::Json;
use axum::http::StatusCode;

pub async fn register(
    ctx: RequestContext,
    Json(args): Json<RegisterArgs>,
) -> ServiceResult<(StatusCode, Json<UserIdResponse>)> {
    let user_id = users::register(&ctx, args).await?;
    let response = UserIdResponse {
        message: "User registered successfully",
        user_id,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn login(
    ctx: RequestContext,
    Json(args): Json<LoginArgs>,
) -> ServiceResponse<UserIdResponse> {
    let user_id = users::login(&ctx, args).await?;
    Ok(Json(UserIdResponse {
        message: "Login successful",
        user_id,
    }))
}

pub async fn forgot_password(
    ctx: RequestContext,
    Json(args): Json<ForgotPasswordArgs>,
) -> ServiceResponse<MessageResponse> {
    users::forgot_password(&ctx, args).await?;
    Ok(Json(MessageResponse::new(
        "Password reset link sent (simulated). Check the server log for the token.",
    )))
}
