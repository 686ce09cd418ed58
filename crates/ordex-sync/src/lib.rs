pub mod client;
pub mod error;

pub use client::{order_id_from_href, SyncClient};
pub use error::SyncError;
