//! Asynchronous file downloads polled from the UI thread

pub mod fetch;
pub mod queue;
pub mod types;

pub use fetch::{Fetch, HttpFetcher};
pub use queue::DownloadQueue;
pub use types::{DownloadOperation, DownloadStatus};
