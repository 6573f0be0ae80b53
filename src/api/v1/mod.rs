pub mod comments;
pub mod follows;
pub mod moods;
pub mod users;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::{get, post, put};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route("/forgot_password", post(users::forgot_password))
        .route("/mood", post(moods::submit))
        .route("/mood/history/{user_id}", get(moods::history))
        .route("/mood/{mood_id}", put(moods::react))
        .route("/moods", get(moods::all))
        .route("/comment", post(comments::add))
        .route("/follow", post(follows::request_follow))
        .route("/unfollow", post(follows::unfollow))
        .route(
            "/accept_follow/{follower_id}/{followed_id}",
            post(follows::accept_follow),
        )
        .route(
            "/is_following/{follower_id}/{followed_id}",
            get(follows::is_following),
        )
        .route(
            "/follow_status/{follower_id}/{followed_id}",
            get(follows::follow_status),
        )
        .route(
            "/pending_follow_requests/{user_id}",
            get(follows::pending_requests),
        )
        .route("/followers/{user_id}", get(follows::followers))
        .route("/following/{user_id}", get(follows::following))
}
