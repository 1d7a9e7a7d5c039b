use crate::error::{InferError, Result};
use crate::model::CommitRecord;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

/// Source of commit history for a single file.
///
/// Ordering contract: implementations must return commits newest first
/// (index 0 is the most recent commit, the last index the oldest). The
/// aggregation step derives `modified` and `published` from those two
/// positions, so a provider with a different order would swap them.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// All commits touching `path`, or an empty vector if the file has no
    /// history (untracked files are not an error).
    async fn history(&self, path: &Path, cwd: &Path) -> Result<Vec<CommitRecord>>;
}

/// Production provider: shells out to the `git` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLog;

#[async_trait]
impl HistoryProvider for GitLog {
    async fn history(&self, path: &Path, cwd: &Path) -> Result<Vec<CommitRecord>> {
        let output = Command::new("git")
            .arg("log")
            .arg("--all")
            .arg("--follow")
            .arg(r#"--format=%aN,%aE,"%cD""#)
            .arg("--")
            .arg(path)
            .current_dir(cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            return Err(InferError::GitLog {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let commits = parse_history(&String::from_utf8_lossy(&output.stdout));
        debug!(
            "git log returned {} commit(s) for {}",
            commits.len(),
            path.display()
        );
        Ok(commits)
    }
}

/// Parses `name,email,"date"` rows into commit records, preserving order.
///
/// Git should yield clean data; a malformed field degrades to an empty
/// string (or the epoch, for dates) rather than failing the run.
pub fn parse_history(raw: &str) -> Vec<CommitRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_bytes());

    reader
        .records()
        .map(|row| {
            let row = row.unwrap_or_else(|_| csv::StringRecord::new());
            let date = row.get(2).unwrap_or("");
            let timestamp = DateTime::parse_from_rfc2822(date)
                .map(|d| d.with_timezone(&Utc))
                .unwrap_or_else(|_| {
                    if !date.is_empty() {
                        warn!("unparsable commit date {date:?}, defaulting to epoch");
                    }
                    DateTime::<Utc>::UNIX_EPOCH
                });
            CommitRecord {
                name: row.get(0).unwrap_or("").to_string(),
                email: row.get(1).unwrap_or("").to_string(),
                timestamp,
            }
        })
        .collect()
}
