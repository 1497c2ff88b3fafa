pub mod client;
pub mod types;

pub use client::{RecordsClient, RecordsClientError};
