use crate::common::context::Context;
use crate::common::init::MIGRATOR;
use crate::common::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::time::Duration;
use tempfile::TempDir;

/// Keeps the database directory alive for as long as the state is in use.
pub struct TestState {
    pub state: AppState,
    _dir: TempDir,
}

impl Context for TestState {
    fn db(&self) -> &Pool<Sqlite> {
        &self.state.db
    }
}

pub async fn test_state() -> TestState {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("test.db"))
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(10));
    let db = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .unwrap();
    MIGRATOR.run(&db).await.unwrap();
    TestState {
        state: AppState { db },
        _dir: dir,
    }
}
