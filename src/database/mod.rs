pub mod connection;
pub mod courses;
pub mod ledgers;
pub mod players;
pub mod scores;
pub mod settings;
pub mod setup;
pub mod store;
pub mod tournaments;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use store::SqliteStore;

#[cfg(test)]
pub(crate) mod fixtures;
