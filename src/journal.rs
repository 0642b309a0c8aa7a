/*
 * quotidie/src/journal.rs
 *
 * Append-only usage log of every quote selected.
 *
 * This module uses an explicit `AppContext` for resolving filesystem
 * locations. The log records selections, not deliveries: a row is
 * appended whether or not the notification made it to the screen.
 */

use crate::context::AppContext;
use crate::model::Quote;
use anyhow::Result;
use chrono::Local;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Log filename inside the context's logs directory.
pub const LOG_FILENAME: &str = "quotes_log.csv";

/// Header row written when the log is first created.
pub const LOG_HEADER: [&str; 3] = ["timestamp", "quote", "author"];

/// Local-time timestamp, ISO-8601 at second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct UsageJournal;

impl UsageJournal {
    /// Append one record for `quote`, creating the log (with header)
    /// if it does not yet exist.
    pub fn append(ctx: &dyn AppContext, quote: &Quote) -> Result<()> {
        Self::append_at(&ctx.log_file_path()?, quote)
    }

    /// Append to an explicit log path.
    ///
    /// The write happens under an exclusive advisory lock so a manual
    /// run and a scheduled run landing at the same moment cannot
    /// interleave rows.
    pub fn append_at(path: &Path, quote: &Quote) -> Result<()> {
        with_lock(path, || {
            let new_file = !path.exists();
            let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
            let mut writer = csv::Writer::from_writer(file);

            if new_file {
                writer.write_record(LOG_HEADER)?;
            }

            let stamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
            writer.write_record([stamp.as_str(), quote.text.as_str(), quote.author.as_str()])?;
            writer.flush()?;
            Ok(())
        })
    }
}

/// Derive the sidecar lock-file path for a data file.
fn get_lock_path(file_path: &Path) -> PathBuf {
    let mut lock_path = file_path.to_path_buf();
    if let Some(ext) = lock_path.extension() {
        let mut new_ext = ext.to_os_string();
        new_ext.push(".lock");
        lock_path.set_extension(new_ext);
    } else {
        lock_path.set_extension("lock");
    }
    lock_path
}

/// Run `f` while holding an exclusive lock on the sidecar lock file.
fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let lock_path = get_lock_path(file_path);
    let file = fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)?;

    file.lock_exclusive()?;
    let result = f();
    file.unlock()?;
    result
}
