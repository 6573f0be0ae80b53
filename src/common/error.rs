use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    let e = e.into();
    if is_store_unavailable(&e) {
        error!("The database is unavailable at {caller}: {e}");
        return Err(AppError::StoreUnavailable);
    }
    error!("An unexpected error has occurred at {caller}: {e}");
    Err(AppError::Unexpected)
}

const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;

fn is_store_unavailable(e: &anyhow::Error) -> bool {
    match e.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)) => true,
        Some(sqlx::Error::Database(e)) => is_locked(e.code().as_deref()),
        _ => false,
    }
}

/// SQLite reports extended result codes; the primary code sits in the low byte.
fn is_locked(code: Option<&str>) -> bool {
    let Some(code) = code.and_then(|code| code.parse::<i32>().ok()) else {
        return false;
    };
    matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED)
}

/// Unwraps an `Ok` value, handles the listed error patterns and treats anything else
/// as unexpected.
macro_rules! unwrap_expect {
    ($result:expr, $($pattern:pat => $handler:expr),+ $(,)?) => {
        match $result {
            Ok(value) => value,
            $($pattern => $handler,)+
            Err(e) => return $crate::common::error::unexpected(e),
        }
    };
}
pub(crate) use unwrap_expect;

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    InternalServerError(&'static str),
    StoreUnavailable,
    MissingRequiredFields,

    UsersNotFound,
    UsersAlreadyExists,
    UsersInvalidCredentials,
    UsersEmailNotFound,

    MoodsNotFound,
    MoodsInvalidReaction,

    FollowsAlreadyRelated,
    FollowsNoPendingRequest,
    FollowsSelfFollow,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        match unexpected::<(), E>(e) {
            Ok(()) => AppError::Unexpected,
            Err(e) => e,
        }
    }
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::InternalServerError(_) => "internal_server_error",
            AppError::StoreUnavailable => "store_unavailable",
            AppError::MissingRequiredFields => "missing_required_fields",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersAlreadyExists => "users.already_exists",
            AppError::UsersInvalidCredentials => "users.invalid_credentials",
            AppError::UsersEmailNotFound => "users.email_not_found",

            AppError::MoodsNotFound => "moods.not_found",
            AppError::MoodsInvalidReaction => "moods.invalid_reaction",

            AppError::FollowsAlreadyRelated => "follows.already_related",
            AppError::FollowsNoPendingRequest => "follows.no_pending_request",
            AppError::FollowsSelfFollow => "follows.self_follow",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::InternalServerError(_) => "An internal server error has occurred.",
            AppError::StoreUnavailable => "The service is temporarily unavailable.",
            AppError::MissingRequiredFields => "Missing required fields",

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersAlreadyExists => "Username or email already exists",
            AppError::UsersInvalidCredentials => "Invalid username or password",
            AppError::UsersEmailNotFound => "Email not found",

            AppError::MoodsNotFound => "This mood does not exist.",
            AppError::MoodsInvalidReaction => "The reaction would overflow the mood's counters.",

            AppError::FollowsAlreadyRelated => "Already following or request pending",
            AppError::FollowsNoPendingRequest => "No pending follow request found",
            AppError::FollowsSelfFollow => "You cannot follow yourself.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::MissingRequiredFields
            | AppError::UsersAlreadyExists
            | AppError::MoodsInvalidReaction
            | AppError::FollowsAlreadyRelated
            | AppError::FollowsSelfFollow => StatusCode::BAD_REQUEST,

            AppError::UsersInvalidCredentials => StatusCode::UNAUTHORIZED,

            AppError::UsersNotFound
            | AppError::UsersEmailNotFound
            | AppError::MoodsNotFound
            | AppError::FollowsNoPendingRequest => StatusCode::NOT_FOUND,

            AppError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Unexpected | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
