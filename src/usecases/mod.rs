pub mod comments;
pub mod follows;
pub mod moods;
pub mod users;
