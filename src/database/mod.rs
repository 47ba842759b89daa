pub mod columns;
pub mod connection;
pub mod matches;
pub mod players;
pub mod rating_history;
pub mod registrations;
pub mod sessions;
pub mod setup;
pub mod store;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use store::SqliteStore;
