use crate::common::context::Context;
use crate::entities::moods::{CreateMoodArgs, Mood};
use crate::models::moods::MoodReactions;

const TABLE_NAME: &str = "moods";
const READ_FIELDS: &str = "id, user_id, emotion, context, date, supports, ripples";

pub async fn create<C: Context>(ctx: &C, args: CreateMoodArgs<'_>) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (id, user_id, emotion, context, date) VALUES (?, ?, ?, ?, ?)"
    );
    sqlx::query(QUERY)
        .bind(args.id)
        .bind(args.user_id)
        .bind(args.emotion)
        .bind(args.context)
        .bind(args.date)
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn exists<C: Context>(ctx: &C, mood_id: &str) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT EXISTS(SELECT 1 FROM ",
        TABLE_NAME,
        " WHERE id = ?)"
    );
    sqlx::query_scalar(QUERY)
        .bind(mood_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_by_user<C: Context>(ctx: &C, user_id: &str) -> sqlx::Result<Vec<Mood>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE user_id = ? ORDER BY date DESC"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_all<C: Context>(ctx: &C) -> sqlx::Result<Vec<Mood>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY date DESC"
    );
    sqlx::query_as(QUERY).fetch_all(ctx.db()).await
}

/// Adds the deltas to both counters in one statement; returns the affected row count.
pub async fn add_reactions<C: Context>(
    ctx: &C,
    mood_id: &str,
    reactions: &MoodReactions,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET supports = supports + ?, ripples = ripples + ? WHERE id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(reactions.supports)
        .bind(reactions.ripples)
        .bind(mood_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}
