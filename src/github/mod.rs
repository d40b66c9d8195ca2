pub mod client;
pub mod error;
pub mod fetch;
pub mod types;

pub use client::create_client;
pub use error::FetchError;
pub use fetch::{fetch_account, is_valid_username};
pub use types::{AccountData, AccountProfile, ActivityEvent, RepositorySummary};
