use sqlx::{Pool, Sqlite};

/// Everything a repository or usecase needs to reach durable storage.
pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<Sqlite>;
}
