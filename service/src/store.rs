//! Dataset loading layer.
//!
//! Provides the [`DataStore`] seam between HTTP handlers and the
//! filesystem. The production implementation re-reads the dataset file
//! on every call; there is no write path, so there is nothing for a
//! cache to go stale against and nothing to lock.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// One of the three named JSON resources served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Politicians,
    Parties,
    Comments,
}

impl Dataset {
    /// File name of the dataset inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Politicians => "politicians.json",
            Self::Parties => "parties.json",
            Self::Comments => "comments.json",
        }
    }

    /// Logical dataset name used in logs and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Politicians => "politicians",
            Self::Parties => "parties",
            Self::Comments => "comments",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error from reading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {dataset} dataset: {source}")]
    Io {
        dataset: Dataset,
        #[source]
        source: std::io::Error,
    },
}

/// Read access to raw dataset bytes.
///
/// The whole file content is returned in one call; decoding never
/// begins against a partial read.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Read the complete raw content of `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file is missing or unreadable.
    async fn read(&self, dataset: Dataset) -> Result<Vec<u8>, StoreError>;
}

/// Filesystem-backed store reading from a fixed data directory.
#[derive(Debug, Clone)]
pub struct FsDataStore {
    root: PathBuf,
}

impl FsDataStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            root: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataStore for FsDataStore {
    async fn read(&self, dataset: Dataset) -> Result<Vec<u8>, StoreError> {
        let path = self.root.join(dataset.file_name());
        tokio::fs::read(&path)
            .await
            .map_err(|source| StoreError::Io { dataset, source })
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! In-memory store for handler and resolver tests.

    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::{DataStore, Dataset, StoreError};

    /// Store serving canned bytes per dataset. Datasets without an
    /// entry behave like missing files.
    #[derive(Debug, Default)]
    pub struct MockDataStore {
        datasets: HashMap<Dataset, Vec<u8>>,
    }

    impl MockDataStore {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with(mut self, dataset: Dataset, bytes: impl Into<Vec<u8>>) -> Self {
            self.datasets.insert(dataset, bytes.into());
            self
        }
    }

    #[async_trait]
    impl DataStore for MockDataStore {
        async fn read(&self, dataset: Dataset) -> Result<Vec<u8>, StoreError> {
            self.datasets.get(&dataset).cloned().ok_or(StoreError::Io {
                dataset,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such dataset"),
            })
        }
    }
}
