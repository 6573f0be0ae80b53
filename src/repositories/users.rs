use crate::common::context::Context;
use crate::entities::users::{CreateUserArgs, User};
use chrono::Utc;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "id, username, email, password_hash, created_at";

pub async fn fetch_one<C: Context>(ctx: &C, user_id: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one_by_username<C: Context>(ctx: &C, username: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE username = ?"
    );
    sqlx::query_as(QUERY)
        .bind(username)
        .fetch_one(ctx.db())
        .await
}

pub async fn fetch_one_by_email<C: Context>(ctx: &C, email: &str) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE email = ?"
    );
    sqlx::query_as(QUERY)
        .bind(email)
        .fetch_one(ctx.db())
        .await
}

pub async fn exists<C: Context>(ctx: &C, user_id: &str) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT EXISTS(SELECT 1 FROM ",
        TABLE_NAME,
        " WHERE id = ?)"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .fetch_one(ctx.db())
        .await
}

pub async fn create<C: Context>(ctx: &C, args: CreateUserArgs<'_>) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (id, username, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)"
    );
    sqlx::query(QUERY)
        .bind(args.id)
        .bind(args.username)
        .bind(args.email)
        .bind(args.password_hash)
        .bind(Utc::now())
        .execute(ctx.db())
        .await?;
    Ok(())
}
