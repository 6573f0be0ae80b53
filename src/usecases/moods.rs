use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::common::fields::required;
use crate::common::ids::generate_id;
use crate::entities::moods::CreateMoodArgs;
use crate::models::comments::Comment;
use crate::models::moods::{Mood, MoodReactions, MoodWithComments, SubmitMoodArgs};
use crate::repositories::{comments, moods};
use crate::usecases::users;
use std::collections::HashMap;
use tracing::info;

pub async fn submit<C: Context>(ctx: &C, args: SubmitMoodArgs) -> ServiceResult<String> {
    let user_id = required(args.user_id)?;
    let emotion = required(args.emotion)?;
    let date = required(args.date)?;
    users::ensure_exists(ctx, &user_id).await?;

    let mood_id = generate_id();
    let create_args = CreateMoodArgs {
        id: &mood_id,
        user_id: &user_id,
        emotion: &emotion,
        context: args.context.as_deref(),
        date: &date,
    };
    match moods::create(ctx, create_args).await {
        Ok(()) => {
            info!(%mood_id, %user_id, %emotion, "Mood submitted");
            Ok(mood_id)
        }
        Err(e) => unexpected(e),
    }
}

/// Fails with `MoodsNotFound` unless `mood_id` refers to a stored mood.
pub async fn ensure_exists<C: Context>(ctx: &C, mood_id: &str) -> ServiceResult<()> {
    match moods::exists(ctx, mood_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::MoodsNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_history<C: Context>(ctx: &C, user_id: &str) -> ServiceResult<Vec<Mood>> {
    match moods::fetch_by_user(ctx, user_id).await {
        Ok(moods) => Ok(moods.into_iter().map(Mood::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all_with_comments<C: Context>(ctx: &C) -> ServiceResult<Vec<MoodWithComments>> {
    let moods = match moods::fetch_all(ctx).await {
        Ok(moods) => moods,
        Err(e) => return unexpected(e),
    };
    let all_comments = match comments::fetch_all(ctx).await {
        Ok(comments) => comments,
        Err(e) => return unexpected(e),
    };

    let mut comments_by_mood: HashMap<String, Vec<Comment>> = HashMap::new();
    for comment in all_comments {
        comments_by_mood
            .entry(comment.mood_id.clone())
            .or_default()
            .push(Comment::from(comment));
    }

    Ok(moods
        .into_iter()
        .map(|mood| {
            let comments = comments_by_mood.remove(&mood.id).unwrap_or_default();
            MoodWithComments {
                mood: Mood::from(mood),
                comments,
            }
        })
        .collect())
}

pub async fn react<C: Context>(
    ctx: &C,
    mood_id: &str,
    reactions: MoodReactions,
) -> ServiceResult<()> {
    match moods::add_reactions(ctx, mood_id, &reactions).await {
        Ok(0) => Err(AppError::MoodsNotFound),
        Ok(_) => Ok(()),
        // counters past i64 would be stored as REAL
        Err(sqlx::Error::Database(e)) if e.is_check_violation() => {
            Err(AppError::MoodsInvalidReaction)
        }
        Err(e) => unexpected(e),
    }
}
