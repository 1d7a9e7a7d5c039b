use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One commit touching the file, as reported by the history provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub name: String,
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-contributor tally, keyed by email.
///
/// `name` is whatever name the contributor used on their first-processed
/// commit; later commits under the same email with a different spelling do
/// not update it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorStat {
    pub email: String,
    pub name: String,
    pub commit_count: u32,
}

/// Metadata derivable from a file's history.
///
/// Used both for the pipeline's metadata bag and for front-matter overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub published: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub author: Option<String>,
}

/// The two metadata sources attached to a file.
#[derive(Debug, Clone, Default)]
pub struct FileData {
    /// Front-matter override bag; values here win over anything computed.
    pub matter: Meta,
    /// The bag this plugin fills.
    pub meta: Meta,
}

/// Descriptor for one content file flowing through the pipeline.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path of the file, relative to `cwd` or absolute.
    pub path: PathBuf,
    /// Directory the history query runs in.
    pub cwd: PathBuf,
    pub data: FileData,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cwd: cwd.into(),
            data: FileData::default(),
        }
    }
}
