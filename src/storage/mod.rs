use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::RecipientRecord;

const DEFAULT_DATA_FILE: &str = "data/user_data.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize recipient record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Persistence seam for the render pipeline. The persisted record is a
/// full replacement, never a merge.
pub trait RecordStore {
    fn persist(&self, record: &RecipientRecord) -> StorageResult<()>;
}

/// Writes the record as the sole contents of a fixed-path JSON file.
#[derive(Debug, Clone)]
pub struct JsonRecordStore {
    data_file: PathBuf,
}

impl JsonRecordStore {
    pub const fn with_path(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    pub fn with_default_path() -> Self {
        Self::with_path(PathBuf::from(DEFAULT_DATA_FILE))
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl RecordStore for JsonRecordStore {
    fn persist(&self, record: &RecipientRecord) -> StorageResult<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let payload = serde_json::to_string(record)?;
        fs::write(&self.data_file, payload)?;
        Ok(())
    }
}
