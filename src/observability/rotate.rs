//! Size-rotated trace file writer.
//!
//! Trace output grows without bound if left alone; this writer renames the
//! active file once it passes a size threshold and keeps a small number of
//! timestamped backups, deleting the rest.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// Rotate once the active file exceeds this many bytes (5 MB).
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;

/// Timestamped backups kept after a rotation.
const KEEP_BACKUPS: usize = 2;

/// A line-oriented file writer with size-based rotation.
///
/// The file opens lazily on the first write and is guarded by a mutex so the
/// exporter can be driven from any thread the subscriber runs on.
pub struct RotatingWriter {
    path: PathBuf,
    handle: Mutex<Option<fs::File>>,
}

impl RotatingWriter {
    /// Creates a writer for `path` without touching the filesystem yet.
    pub const fn new(path: PathBuf) -> Self {
        Self {
            path,
            handle: Mutex::new(None),
        }
    }

    /// Appends one line, rotating first if the file has grown past the limit.
    ///
    /// The line is flushed immediately; trace output must survive the host
    /// tearing the plugin down without warning.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| std::io::Error::other(format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }

        let file = handle
            .as_mut()
            .ok_or_else(|| std::io::Error::other("trace file unavailable"))?;
        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > ROTATE_AT_BYTES)
    }

    /// Renames the active file to a timestamped backup and prunes old ones.
    fn rotate(&self) -> std::io::Result<()> {
        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let backup = self.path.with_extension(format!("json.{stamp}"));
        if self.path.exists() {
            fs::rename(&self.path, &backup)?;
        }

        self.prune_backups()
    }

    /// Deletes all but the newest [`KEEP_BACKUPS`] backup files.
    ///
    /// Individual deletion failures are ignored so one stubborn file cannot
    /// stall rotation.
    fn prune_backups(&self) -> std::io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(stem) = self.path.file_stem().and_then(|s| s.to_str()) else {
            return Ok(());
        };

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(stem) && name.contains(".json."))
            })
            .collect();

        backups.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            b_time.cmp(&a_time)
        });

        for stale in backups.iter().skip(KEEP_BACKUPS) {
            let _ = fs::remove_file(stale);
        }

        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_lines_and_creates_the_file_lazily() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("traces.json");
        let writer = RotatingWriter::new(path.clone());
        assert!(!path.exists());

        writer.write_line("{\"a\":1}").expect("first write");
        writer.write_line("{\"b\":2}").expect("second write");

        let contents = fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }
}
