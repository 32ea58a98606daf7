//! Depth-first collection of a directory subtree into one artifact.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Local};
use jwalk::{Parallelism, WalkDir};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use codedump_core::{CollectConfig, CollectError};

use crate::artifact::{artifact_name, project_name, write_block, write_header};

/// Upper bound on `_<n>` suffixes tried when an artifact name is taken.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Outcome of a successful collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectReport {
    /// Full path of the generated artifact.
    pub artifact_path: PathBuf,
    /// File name of the generated artifact.
    pub artifact_name: String,
    /// Number of files written into the artifact.
    pub files_written: usize,
    /// Files left out by the exclusion policy.
    pub files_excluded: usize,
    /// Files that passed the policy but could not be read.
    pub files_unreadable: usize,
    /// Size of the artifact in bytes.
    pub bytes_written: u64,
    /// Timestamp stamped into the artifact.
    pub collected_at: DateTime<Local>,
}

/// Walks a directory and concatenates its text files.
///
/// The walk is serial and depth-first; entries are visited in the order the
/// filesystem lists them.
#[derive(Debug, Clone, Default)]
pub struct Collector {
    config: Arc<CollectConfig>,
}

impl Collector {
    /// Create a collector with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collector with a custom policy.
    pub fn with_config(config: CollectConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The active collection policy.
    pub fn config(&self) -> &CollectConfig {
        &self.config
    }

    /// Collect `root` into a new artifact stamped with the current time.
    pub fn collect(&self, root: &Path) -> Result<CollectReport, CollectError> {
        self.collect_at(root, Local::now())
    }

    /// Collect `root` into a new artifact stamped with `timestamp`.
    pub fn collect_at(
        &self,
        root: &Path,
        timestamp: DateTime<Local>,
    ) -> Result<CollectReport, CollectError> {
        let start = Instant::now();

        let metadata = std::fs::metadata(root).map_err(|e| CollectError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(CollectError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let project = project_name(root);
        let (artifact_path, name, file) = self.create_artifact(root, &project, &timestamp)?;
        let write_err = |source| CollectError::Write {
            path: artifact_path.clone(),
            source,
        };

        let mut writer = BufWriter::new(file);
        let mut report = CollectReport {
            artifact_path: artifact_path.clone(),
            artifact_name: name,
            files_written: 0,
            files_excluded: 0,
            files_unreadable: 0,
            bytes_written: 0,
            collected_at: timestamp,
        };

        report.bytes_written +=
            write_header(&mut writer, &project, root, &timestamp).map_err(write_err)?;

        for entry_result in self.walker(root) {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    debug!(path = ?err.path(), error = %err, "walk error, continuing");
                    continue;
                }
            };

            if entry.depth == 0 || entry.file_type().is_dir() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if self.config.is_excluded_file(&file_name) {
                report.files_excluded += 1;
                continue;
            }

            let path = entry.path();
            let contents = match read_text(&path) {
                Some(contents) => contents,
                None => {
                    report.files_unreadable += 1;
                    continue;
                }
            };

            let relative = path.strip_prefix(root).unwrap_or(&path);
            report.bytes_written +=
                write_block(&mut writer, relative, &contents).map_err(write_err)?;
            report.files_written += 1;
        }

        writer.flush().map_err(write_err)?;

        info!(
            artifact = %report.artifact_path.display(),
            files = report.files_written,
            excluded = report.files_excluded,
            unreadable = report.files_unreadable,
            bytes = report.bytes_written,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "collection complete"
        );

        Ok(report)
    }

    /// Build the serial walker, pruning denylisted directories before descent.
    fn walker(&self, root: &Path) -> WalkDir {
        let config = Arc::clone(&self.config);
        WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .sort(false)
            .skip_hidden(false)
            .follow_links(false)
            .process_read_dir(move |depth, _path, _state, children| {
                // `None` is the synthetic listing that holds the root itself
                if depth.is_none() {
                    return;
                }
                children.retain(|child| match child {
                    Ok(entry) => {
                        let pruned = entry.file_type().is_dir()
                            && config.is_excluded_dir(&entry.file_name().to_string_lossy());
                        if pruned {
                            debug!(path = %entry.path().display(), "pruned directory");
                        }
                        !pruned
                    }
                    Err(_) => true,
                });
            })
    }

    /// Create the artifact with create-new semantics, retrying with a
    /// numeric suffix while the name is taken.
    fn create_artifact(
        &self,
        root: &Path,
        project: &str,
        timestamp: &DateTime<Local>,
    ) -> Result<(PathBuf, String, File), CollectError> {
        let mut last_path = root.join(artifact_name(&self.config, project, timestamp, 0));

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = artifact_name(&self.config, project, timestamp, attempt);
            let path = root.join(&name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, name, file)),
                Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                    last_path = path;
                }
                Err(source) => return Err(CollectError::CreateArtifact { path, source }),
            }
        }

        Err(CollectError::CreateArtifact {
            path: last_path,
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "no free artifact name",
            ),
        })
    }
}

/// Read a regular file as (lossy) UTF-8 text.
///
/// Returns `None` for anything unreadable or not a regular file, so that
/// FIFOs and dangling or directory symlinks are skipped instead of blocking
/// or aborting the walk.
fn read_text(path: &Path) -> Option<String> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable file");
            return None;
        }
    };
    if !metadata.is_file() {
        debug!(path = %path.display(), "skipping non-regular file");
        return None;
    }

    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "skipping unreadable file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn artifact_text(report: &CollectReport) -> String {
        fs::read_to_string(&report.artifact_path).unwrap()
    }

    #[test]
    fn test_collect_single_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();

        let report = Collector::new().collect(temp.path()).unwrap();

        assert_eq!(report.files_written, 1);
        assert_eq!(report.artifact_path.parent().unwrap(), temp.path());
        let text = artifact_text(&report);
        assert!(text.contains("####\na.txt\nhello\n#####\n\n"));
        assert_eq!(report.bytes_written as usize, text.len());
    }

    #[test]
    fn test_collect_uses_timestamp_in_name_and_header() {
        let temp = TempDir::new().unwrap();
        let ts = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        let report = Collector::new().collect_at(temp.path(), ts).unwrap();

        let project = project_name(temp.path());
        assert_eq!(
            report.artifact_name,
            format!("dump_{project}_20250102030405.txt")
        );
        assert!(artifact_text(&report).contains("🕒 COLLECTED: 2025-01-02 03:04:05\n"));
    }

    #[test]
    fn test_collect_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = Collector::new().collect(&file).unwrap_err();
        assert!(matches!(err, CollectError::NotADirectory { .. }));
    }

    #[test]
    fn test_collect_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = Collector::new()
            .collect(&temp.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, CollectError::NotFound { .. }));
    }

    #[test]
    fn test_hidden_directories_are_walked() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".github")).unwrap();
        fs::write(temp.path().join(".github").join("ci.yml"), "on: push").unwrap();
        fs::write(temp.path().join(".env"), "SECRET=1").unwrap();

        let report = Collector::new().collect(temp.path()).unwrap();
        let text = artifact_text(&report);

        assert!(text.contains("on: push"));
        assert!(!text.contains("SECRET"));
        // .env and the artifact being written
        assert_eq!(report.files_excluded, 2);
    }

    #[test]
    fn test_lossy_decoding() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("latin1.txt"), [b'c', b'a', b'f', 0xe9]).unwrap();

        let report = Collector::new().collect(temp.path()).unwrap();
        assert_eq!(report.files_written, 1);
        assert!(artifact_text(&report).contains("caf\u{FFFD}"));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_symlinks_are_not_followed() {
        let temp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), "outside").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("link")).unwrap();

        let report = Collector::new().collect(temp.path()).unwrap();

        assert!(!artifact_text(&report).contains("outside"));
        assert_eq!(report.files_unreadable, 1);
    }
}
