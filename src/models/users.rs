use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct RegisterArgs {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginArgs {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct ForgotPasswordArgs {
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct UserIdResponse {
    pub message: &'static str,
    pub user_id: String,
}
