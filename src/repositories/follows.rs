use crate::common::context::Context;
use crate::entities::follows::Follow;
use crate::models::follows::FollowStatus;

const TABLE_NAME: &str = "follows";
const READ_FIELDS: &str = "follower_id, followed_id, status";

pub async fn fetch_one<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
) -> sqlx::Result<Option<Follow>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE follower_id = ? AND followed_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(follower_id)
        .bind(followed_id)
        .fetch_optional(ctx.db())
        .await
}

/// Inserts a pending edge. The composite primary key rejects a second edge for the
/// same ordered pair, whatever its status.
pub async fn create<C: Context>(ctx: &C, follower_id: &str, followed_id: &str) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (follower_id, followed_id, status) VALUES (?, ?, ?)"
    );
    sqlx::query(QUERY)
        .bind(follower_id)
        .bind(followed_id)
        .bind(FollowStatus::Pending.as_str())
        .execute(ctx.db())
        .await?;
    Ok(())
}

pub async fn delete<C: Context>(ctx: &C, follower_id: &str, followed_id: &str) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE follower_id = ? AND followed_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(follower_id)
        .bind(followed_id)
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

/// Moves the edge to `to` only while it is still in `from`; returns the affected row count.
pub async fn update_status<C: Context>(
    ctx: &C,
    follower_id: &str,
    followed_id: &str,
    from: FollowStatus,
    to: FollowStatus,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET status = ? WHERE follower_id = ? AND followed_id = ? AND status = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(to.as_str())
        .bind(follower_id)
        .bind(followed_id)
        .bind(from.as_str())
        .execute(ctx.db())
        .await?;
    Ok(result.rows_affected())
}

pub async fn fetch_follower_usernames<C: Context>(
    ctx: &C,
    user_id: &str,
) -> sqlx::Result<Vec<String>> {
    const QUERY: &str = const_str::concat!(
        "SELECT u.username FROM ",
        TABLE_NAME,
        " f INNER JOIN users u ON u.id = f.follower_id ",
        "WHERE f.followed_id = ? AND f.status = ? ORDER BY u.username"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .bind(FollowStatus::Accepted.as_str())
        .fetch_all(ctx.db())
        .await
}

pub async fn fetch_following_usernames<C: Context>(
    ctx: &C,
    user_id: &str,
) -> sqlx::Result<Vec<String>> {
    const QUERY: &str = const_str::concat!(
        "SELECT u.username FROM ",
        TABLE_NAME,
        " f INNER JOIN users u ON u.id = f.followed_id ",
        "WHERE f.follower_id = ? AND f.status = ? ORDER BY u.username"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .bind(FollowStatus::Accepted.as_str())
        .fetch_all(ctx.db())
        .await
}

/// Followers whose request toward `user_id` is still awaiting a decision, oldest first.
pub async fn fetch_pending_follower_ids<C: Context>(
    ctx: &C,
    user_id: &str,
) -> sqlx::Result<Vec<String>> {
    const QUERY: &str = const_str::concat!(
        "SELECT follower_id FROM ",
        TABLE_NAME,
        " WHERE followed_id = ? AND status = ? ORDER BY rowid"
    );
    sqlx::query_scalar(QUERY)
        .bind(user_id)
        .bind(FollowStatus::Pending.as_str())
        .fetch_all(ctx.db())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::test_state;
    use crate::repositories::users::tests::insert_user;

    #[tokio::test]
    async fn duplicate_insert_is_a_unique_violation() {
        let ctx = test_state().await;
        let a = insert_user(&ctx, "alice").await;
        let b = insert_user(&ctx, "bob").await;

        create(&ctx, &a, &b).await.unwrap();
        match create(&ctx, &a, &b).await {
            Err(sqlx::Error::Database(e)) => assert!(e.is_unique_violation()),
            other => panic!("expected unique violation, got {other:?}"),
        }

        // the reverse direction is a different edge
        create(&ctx, &b, &a).await.unwrap();
    }

    #[tokio::test]
    async fn conditional_update_only_applies_once() {
        let ctx = test_state().await;
        let a = insert_user(&ctx, "alice").await;
        let b = insert_user(&ctx, "bob").await;

        let missing = update_status(&ctx, &a, &b, FollowStatus::Pending, FollowStatus::Accepted)
            .await
            .unwrap();
        assert_eq!(missing, 0);

        create(&ctx, &a, &b).await.unwrap();
        let first = update_status(&ctx, &a, &b, FollowStatus::Pending, FollowStatus::Accepted)
            .await
            .unwrap();
        let second = update_status(&ctx, &a, &b, FollowStatus::Pending, FollowStatus::Accepted)
            .await
            .unwrap();
        assert_eq!((first, second), (1, 0));

        let edge = fetch_one(&ctx, &a, &b).await.unwrap().unwrap();
        assert_eq!(edge.status, "accepted");
    }

    #[tokio::test]
    async fn delete_of_absent_edge_is_a_no_op() {
        let ctx = test_state().await;
        let a = insert_user(&ctx, "alice").await;
        let b = insert_user(&ctx, "bob").await;

        assert_eq!(delete(&ctx, &a, &b).await.unwrap(), 0);
        create(&ctx, &a, &b).await.unwrap();
        assert_eq!(delete(&ctx, &a, &b).await.unwrap(), 1);
        assert!(fetch_one(&ctx, &a, &b).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn self_edges_are_rejected_by_the_schema() {
        let ctx = test_state().await;
        let a = insert_user(&ctx, "alice").await;
        match create(&ctx, &a, &a).await {
            Err(sqlx::Error::Database(e)) => assert!(e.is_check_violation()),
            other => panic!("expected check violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn listings_split_pending_from_accepted() {
        let ctx = test_state().await;
        let alice = insert_user(&ctx, "alice").await;
        let bob = insert_user(&ctx, "bob").await;
        let carol = insert_user(&ctx, "carol").await;

        create(&ctx, &alice, &carol).await.unwrap();
        create(&ctx, &bob, &carol).await.unwrap();
        update_status(&ctx, &bob, &carol, FollowStatus::Pending, FollowStatus::Accepted)
            .await
            .unwrap();

        let pending = fetch_pending_follower_ids(&ctx, &carol).await.unwrap();
        assert_eq!(pending, vec![alice.clone()]);

        let followers = fetch_follower_usernames(&ctx, &carol).await.unwrap();
        assert_eq!(followers, vec!["bob"]);

        let following = fetch_following_usernames(&ctx, &bob).await.unwrap();
        assert_eq!(following, vec!["carol"]);
        assert!(fetch_following_usernames(&ctx, &alice).await.unwrap().is_empty());
    }
}
