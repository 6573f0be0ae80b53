use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Mood {
    pub id: String,
    pub user_id: String,
    pub emotion: String,
    pub context: Option<String>,
    pub date: String,
    pub supports: i64,
    pub ripples: i64,
}

pub struct CreateMoodArgs<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub emotion: &'a str,
    pub context: Option<&'a str>,
    pub date: &'a str,
}
