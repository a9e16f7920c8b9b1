//! Download operation types

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Pending,
    Complete,
    Failed,
}

/// One transfer, carrying a typed payload that identifies what it is for.
///
/// The queue owns the operation until it completes; it is then moved into
/// the completion handler.
#[derive(Debug)]
pub struct DownloadOperation<T> {
    pub url: String,
    pub buffer: Vec<u8>,
    pub status: DownloadStatus,
    pub data: T,
}

impl<T> DownloadOperation<T> {
    pub fn new(url: impl Into<String>, data: T) -> Self {
        Self {
            url: url.into(),
            buffer: Vec::new(),
            status: DownloadStatus::Pending,
            data,
        }
    }
}
