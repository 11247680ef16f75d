//! Record sources: where the candidate collection comes from.
//!
//! A [`RecordSource`] hands out the full, unfiltered collection. The query
//! pipeline only ever reads it, so sources share one immutable `Arc<[_]>`
//! instead of copying records per request.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use roster_seeker::Candidate;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while loading the candidate collection.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read candidates from {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse candidates in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Supplies the full candidate collection.
pub trait RecordSource: Send + Sync {
    /// Returns every candidate, in source order.
    fn load(&self) -> Result<Arc<[Candidate]>, SourceError>;
}

/// On-disk layout: `{"candidates": [...]}`.
#[derive(Debug, Deserialize)]
struct CandidateFile {
    candidates: Vec<Candidate>,
}

/// Reads candidates from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Arc<[Candidate]>, SourceError> {
        let bytes = fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let file: CandidateFile =
            serde_json::from_slice(&bytes).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(
            path = %self.path.display(),
            count = file.candidates.len(),
            "loaded candidates"
        );
        Ok(file.candidates.into())
    }
}

/// Loads the inner source once and serves that collection afterwards.
///
/// A failed load is not remembered; the next call tries again.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: OnceCell<Arc<[Candidate]>>,
}

impl<S: RecordSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        CachedSource {
            inner,
            cache: OnceCell::new(),
        }
    }

    /// Returns `true` once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    fn load(&self) -> Result<Arc<[Candidate]>, SourceError> {
        self.cache
            .get_or_try_init(|| {
                let records = self.inner.load()?;
                info!(count = records.len(), "candidate collection cached");
                Ok(records)
            })
            .map(Arc::clone)
    }
}

/// A fixed collection held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    records: Arc<[Candidate]>,
}

impl StaticSource {
    pub fn new(records: impl Into<Arc<[Candidate]>>) -> Self {
        StaticSource {
            records: records.into(),
        }
    }
}

impl RecordSource for StaticSource {
    fn load(&self) -> Result<Arc<[Candidate]>, SourceError> {
        Ok(Arc::clone(&self.records))
    }
}
