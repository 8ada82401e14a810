//! Flat-file persistence for inventory snapshots.
//!
//! # Responsibility
//! - Define the load/save contract between a session and external storage.
//! - Convert records to and from the fixed five-field line format.
//!
//! # Invariants
//! - Storage owns no business rules; it never deduplicates or validates ids.
//! - I/O failures are returned to the caller, never folded into an empty result.
//!
//! # See also
//! - `csv_file` for the line format.

use crate::model::game::GameTitle;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

mod csv_file;

pub use csv_file::{format_records, parse_records, CsvFileStore, FIELDS_PER_RECORD};

pub type StorageResult<T> = Result<T, StorageError>;

/// File operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Load,
    Save,
}

impl Display for StorageOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Save => write!(f, "save"),
        }
    }
}

#[derive(Debug)]
pub enum StorageError {
    Io {
        op: StorageOp,
        path: PathBuf,
        source: io::Error,
    },
}

impl StorageError {
    pub(crate) fn io(op: StorageOp, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns whether the failure was caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { op, path, source } => {
                write!(f, "failed to {op} `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Load/save contract for inventory snapshots.
pub trait InventoryStore {
    /// Reads every well-formed record at `path`, skipping malformed lines.
    fn load(&self, path: &Path) -> StorageResult<Vec<GameTitle>>;

    /// Writes `games` in order, replacing any existing content at `path`.
    fn save(&self, path: &Path, games: &[GameTitle]) -> StorageResult<()>;
}
