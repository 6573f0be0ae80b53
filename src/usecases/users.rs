use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected, unwrap_expect};
use crate::common::fields::required;
use crate::common::ids::{generate_id, generate_reset_token};
use crate::entities::users::CreateUserArgs;
use crate::models::users::{ForgotPasswordArgs, LoginArgs, RegisterArgs};
use crate::repositories::users;
use tracing::info;

/// Fails with `UsersNotFound` unless `user_id` belongs to a registered user.
pub async fn ensure_exists<C: Context>(ctx: &C, user_id: &str) -> ServiceResult<()> {
    match users::exists(ctx, user_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn register<C: Context>(ctx: &C, args: RegisterArgs) -> ServiceResult<String> {
    let username = required(args.username)?;
    let email = required(args.email)?;
    let password = required(args.password)?;

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    let user_id = generate_id();
    let create_args = CreateUserArgs {
        id: &user_id,
        username: &username,
        email: &email,
        password_hash: &password_hash,
    };
    match users::create(ctx, create_args).await {
        Ok(()) => {
            info!(%user_id, %username, "User registered");
            Ok(user_id)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(AppError::UsersAlreadyExists)
        }
        Err(e) => unexpected(e),
    }
}

pub async fn login<C: Context>(ctx: &C, args: LoginArgs) -> ServiceResult<String> {
    let username = required(args.username)?;
    let password = required(args.password)?;

    let user = unwrap_expect! {
        users::fetch_one_by_username(ctx, &username).await,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersInvalidCredentials)
    };

    if !bcrypt::verify(&password, &user.password_hash)? {
        return Err(AppError::UsersInvalidCredentials);
    }
    Ok(user.id)
}

/// Reset links are not delivered anywhere; the token is written to the log instead.
pub async fn forgot_password<C: Context>(ctx: &C, args: ForgotPasswordArgs) -> ServiceResult<()> {
    let email = required(args.email)?;
    let user = unwrap_expect! {
        users::fetch_one_by_email(ctx, &email).await,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::UsersEmailNotFound)
    };

    let reset_token = generate_reset_token();
    info!(user_id = %user.id, %email, %reset_token, "Password reset token issued");
    Ok(())
}
