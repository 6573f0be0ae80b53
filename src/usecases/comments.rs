use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::common::fields::required;
use crate::common::ids::generate_id;
use crate::models::comments::{AddCommentArgs, Comment};
use crate::repositories::comments;
use crate::usecases::{moods, users};
use tracing::info;

pub async fn add<C: Context>(
    ctx: &C,
    mood_id: &str,
    user_id: &str,
    content: &str,
) -> ServiceResult<Comment> {
    users::ensure_exists(ctx, user_id).await?;
    moods::ensure_exists(ctx, mood_id).await?;

    let comment_id = generate_id();
    match comments::create(ctx, &comment_id, mood_id, user_id, content).await {
        Ok(comment) => {
            info!(%comment_id, mood_id, user_id, "Comment added");
            Ok(Comment::from(comment))
        }
        Err(e) => unexpected(e),
    }
}

pub async fn add_from_args<C: Context>(ctx: &C, args: AddCommentArgs) -> ServiceResult<Comment> {
    let mood_id = required(args.mood_id)?;
    let user_id = required(args.user_id)?;
    let content = required(args.content)?;
    add(ctx, &mood_id, &user_id, &content).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::AppError;
    use crate::common::testing::test_state;
    use crate::repositories::users::tests::insert_user;

    #[tokio::test]
    async fn comments_need_a_known_mood_and_user() {
        let ctx = test_state().await;
        let alice = insert_user(&ctx, "alice").await;

        let no_mood = add(&ctx, "ghost", &alice, "hello").await;
        assert!(matches!(no_mood, Err(AppError::MoodsNotFound)));

        let no_user = add(&ctx, "ghost", "nobody", "hello").await;
        assert!(matches!(no_user, Err(AppError::UsersNotFound)));

        let missing = add_from_args(
            &ctx,
            AddCommentArgs {
                mood_id: Some("ghost".to_owned()),
                user_id: Some(alice),
                content: Some(String::new()),
            },
        )
        .await;
        assert!(matches!(missing, Err(AppError::MissingRequiredFields)));
    }
}
