//! Worker-pool download queue, drained once per UI tick

use crate::download::fetch::Fetch;
use crate::download::types::{DownloadOperation, DownloadStatus};
use crate::error::FetchError;

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

type Job = (u64, String);
type JobResult = (u64, Result<Vec<u8>, FetchError>);

/// Runs transfers on worker threads. Only the URL crosses to a worker; the
/// operation and its payload stay on the owning thread until completion.
pub struct DownloadQueue<T> {
    jobs: Option<Sender<Job>>,
    results: Receiver<JobResult>,
    pending: HashMap<u64, DownloadOperation<T>>,
    next_id: u64,
    workers: Vec<JoinHandle<()>>,
}

impl<T> DownloadQueue<T> {
    pub fn new(fetcher: Arc<dyn Fetch>, workers: usize) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (result_tx, result_rx) = mpsc::channel::<JobResult>();
        let job_rx = Arc::new(Mutex::new(job_rx));

        let handles = (0..workers.max(1))
            .map(|_| {
                let job_rx = Arc::clone(&job_rx);
                let result_tx = result_tx.clone();
                let fetcher = Arc::clone(&fetcher);
                std::thread::spawn(move || {
                    loop {
                        let job = match job_rx.lock() {
                            Ok(rx) => rx.recv(),
                            Err(_) => break,
                        };
                        let Ok((id, url)) = job else { break };
                        let result = fetcher.fetch(&url);
                        if result_tx.send((id, result)).is_err() {
                            break;
                        }
                    }
                })
            })
            .collect();

        Self {
            jobs: Some(job_tx),
            results: result_rx,
            pending: HashMap::new(),
            next_id: 0,
            workers: handles,
        }
    }

    pub fn download_add(&mut self, operation: DownloadOperation<T>) {
        let id = self.next_id;
        self.next_id += 1;

        let sent = self
            .jobs
            .as_ref()
            .map(|jobs| jobs.send((id, operation.url.clone())).is_ok())
            .unwrap_or(false);

        if !sent {
            log::warn!("Download queue is closed, dropping {}", operation.url);
            return;
        }
        self.pending.insert(id, operation);
    }

    /// Drain transfers that finished since the last call, handing each one to
    /// `on_complete`. Never blocks.
    ///
    /// Returns true if something completed during this call or work is still
    /// outstanding.
    pub fn process(&mut self, mut on_complete: impl FnMut(DownloadOperation<T>)) -> bool {
        let mut completed = 0;

        while let Ok((id, result)) = self.results.try_recv() {
            let Some(mut operation) = self.pending.remove(&id) else {
                continue;
            };
            match result {
                Ok(bytes) => {
                    operation.buffer = bytes;
                    operation.status = DownloadStatus::Complete;
                }
                Err(e) => {
                    log::warn!("Download of {} failed: {}", operation.url, e);
                    operation.status = DownloadStatus::Failed;
                }
            }
            on_complete(operation);
            completed += 1;
        }

        completed > 0 || !self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<T> Drop for DownloadQueue<T> {
    fn drop(&mut self) {
        // Closing the job channel lets idle workers exit; busy ones are detached
        self.jobs = None;
        if !self.pending.is_empty() {
            log::debug!("Dropping download queue with {} transfers in flight", self.pending.len());
            return;
        }
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}
