pub mod connection;
pub mod listings;
pub mod sessions;

pub use connection::{init_db, Database};
