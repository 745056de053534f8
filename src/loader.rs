//! Background loading of chart data files.
//!
//! Each chart on screen owns one [`ChartData`]. Creating it spawns a thread
//! that reads and parses the file, then sends the result over a channel; the
//! frame loop polls the receiver without blocking. There are no retries and
//! no timeout: a failed load is terminal until the page is revisited, and a
//! read that never finishes leaves the chart in its loading state.
//!
//! Dropping the `ChartData` (navigating away) drops the receiver, so a late
//! sender's `send` simply fails and the result is discarded. A chart that is
//! no longer on screen can never be updated.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use thiserror::Error;

use crate::table::{parse_table, DataTable, TableError};

/// Errors surfaced by a data file load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

/// Result sent back from the loader thread.
pub type LoadResult = Result<DataTable, LoadError>;

/// Read and parse a data file. Runs on the loader thread; also usable
/// synchronously from tests.
pub fn load_table(path: &Path) -> LoadResult {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// One chart's data, from requested to terminal.
pub enum ChartData {
    /// Load in flight; the receiver's sender lives on the loader thread.
    Loading(Receiver<LoadResult>),
    /// Parse succeeded.
    Ready(DataTable),
    /// Read or parse failed. Terminal: no retry until the page is recreated.
    Failed,
}

impl ChartData {
    /// Start loading `path` on a background thread.
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = channel();
        thread::spawn(move || {
            let result = load_table(&path);
            // The page may have been left before the read finished; a dead
            // receiver just swallows the result.
            let _ = sender.send(result);
        });
        ChartData::Loading(receiver)
    }

    /// Drain the channel if a result arrived. Called once per frame.
    pub fn poll(&mut self) {
        let ChartData::Loading(receiver) = self else {
            return;
        };

        match receiver.try_recv() {
            Ok(Ok(table)) => *self = ChartData::Ready(table),
            Ok(Err(err)) => {
                tracing::warn!("chart data load failed: {err}");
                *self = ChartData::Failed;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                // Loader thread died without sending; treat as a failed load.
                tracing::warn!("chart data loader exited without a result");
                *self = ChartData::Failed;
            }
        }
    }

    /// Parsed table, once ready.
    pub fn table(&self) -> Option<&DataTable> {
        match self {
            ChartData::Ready(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ChartData::Loading(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ChartData::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn poll_until_settled(data: &mut ChartData) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while data.is_loading() && Instant::now() < deadline {
            data.poll();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_missing_file_settles_into_failed() {
        let mut data = ChartData::spawn(PathBuf::from("no/such/file.dat"));
        poll_until_settled(&mut data);
        assert!(data.is_failed());

        // Terminal: further polls change nothing.
        data.poll();
        assert!(data.is_failed());
    }

    #[test]
    fn test_load_table_reads_and_parses() {
        let path = std::env::temp_dir().join("folio_loader_roundtrip.dat");
        fs::write(&path, "epoch a b\n0 1 2\n1 3 4\n").unwrap();

        let table = load_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.record(1).unwrap().get("b"), Some(4.0));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_empty_file_is_a_parse_failure() {
        let path = std::env::temp_dir().join("folio_loader_empty.dat");
        fs::write(&path, "\n\n").unwrap();

        let err = load_table(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_dropped_receiver_discards_late_result() {
        let path = std::env::temp_dir().join("folio_loader_dropped.dat");
        fs::write(&path, "epoch a\n0 1\n").unwrap();

        // Dropping the ChartData before the thread finishes must not panic
        // anything; the send error is swallowed on the loader thread.
        let data = ChartData::spawn(path.clone());
        drop(data);
        thread::sleep(Duration::from_millis(50));

        fs::remove_file(&path).ok();
    }
}
