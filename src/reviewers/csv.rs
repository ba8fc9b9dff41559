//! Two-column CSV file of saved reviewers.
//!
//! Each record is `repo,reviewers` where `reviewers` is a comma-joined list of
//! logins, so the second field is normally quoted:
//!
//! ```text
//! acme/widgets,"alice,bob"
//! acme/gears,carol
//! ```

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ReviewerStoreError;

use super::store::ReviewerStore;

/// File name of the reviewers file in the home directory.
pub const DEFAULT_REVIEWERS_FILE_NAME: &str = ".__reviewers.csv";

/// Fields per record: repository and joined logins.
const FIELDS_PER_RECORD: usize = 2;

/// Reviewer store backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvReviewerStore {
    path: PathBuf,
}

impl CsvReviewerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.__reviewers.csv`.
    pub fn in_home_dir() -> Result<Self, ReviewerStoreError> {
        let home = dirs::home_dir().ok_or(ReviewerStoreError::NoHomeDir)?;
        Ok(Self::new(home.join(DEFAULT_REVIEWERS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<(String, String)>, ReviewerStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ReviewerStoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        parse_records(&content).map_err(|(line, reason)| ReviewerStoreError::Malformed {
            path: self.path.clone(),
            line,
            reason,
        })
    }

    fn write_records(&self, records: &[(String, String)]) -> Result<(), ReviewerStoreError> {
        let write_err = |source: std::io::Error| ReviewerStoreError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        {
            let mut writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file_mut());
            for (repo, reviewers) in records {
                writer
                    .write_record([repo, reviewers])
                    .map_err(|e| write_err(e.into()))?;
            }
            writer.flush().map_err(write_err)?;
        }
        tmp.as_file_mut().flush().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        Ok(())
    }
}

impl ReviewerStore for CsvReviewerStore {
    fn get(&self, repo: &str) -> Result<Vec<String>, ReviewerStoreError> {
        let records = self.read_records()?;
        let reviewers = records
            .into_iter()
            .find(|(name, _)| name == repo)
            .map(|(_, reviewers)| split_logins(&reviewers))
            .unwrap_or_default();

        debug!("Loaded {} saved reviewers for {}", reviewers.len(), repo);
        Ok(reviewers)
    }

    fn set(&self, repo: &str, reviewers: &[String]) -> Result<(), ReviewerStoreError> {
        let mut records = self.read_records()?;
        let joined = reviewers.join(",");

        match records.iter_mut().find(|(name, _)| name == repo) {
            Some(record) => record.1 = joined,
            None => records.push((repo.to_string(), joined)),
        }

        self.write_records(&records)?;
        debug!("Saved {} reviewers for {} to {}", reviewers.len(), repo, self.path.display());
        Ok(())
    }
}

fn split_logins(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|login| !login.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `repo,reviewers` records. Every record must have exactly two fields.
///
/// On failure returns the 1-based line the offending record starts on and a
/// reason.
fn parse_records(content: &str) -> Result<Vec<(String, String)>, (u64, String)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| (e.position().map_or(0, |p| p.line()), e.to_string()))?;
        if record.len() != FIELDS_PER_RECORD {
            let line = record.position().map_or(0, |p| p.line());
            return Err((
                line,
                format!("expected {} fields, found {}", FIELDS_PER_RECORD, record.len()),
            ));
        }
        records.push((record[0].to_string(), record[1].to_string()));
    }

    Ok(records)
}
