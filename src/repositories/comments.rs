use crate::common::context::Context;
use crate::entities::comments::Comment;

const TABLE_NAME: &str = "comments";
const READ_FIELDS: &str = "id, mood_id, user_id, content, timestamp";

pub async fn create<C: Context>(
    ctx: &C,
    comment_id: &str,
    mood_id: &str,
    user_id: &str,
    content: &str,
) -> sqlx::Result<Comment> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (id, mood_id, user_id, content, timestamp) VALUES (?, ?, ?, ?, ?) RETURNING ",
        READ_FIELDS
    );
    sqlx::query_as(QUERY)
        .bind(comment_id)
        .bind(mood_id)
        .bind(user_id)
        .bind(content)
        .bind(chrono::Utc::now())
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Comment>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY timestamp, rowid"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}
