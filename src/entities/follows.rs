use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Follow {
    pub follower_id: String,
    pub followed_id: String,
    pub status: String,
}
