pub mod context;
pub mod env;
pub mod error;
pub mod fields;
pub mod ids;
pub mod init;
pub mod state;
#[cfg(test)]
pub mod testing;
