//! JSON documents on disk
//!
//! Files are never edited in place. A new version is staged next to the
//! target and renamed over it, so readers see either the old document or the
//! new one.

use std::ffi::OsString;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LedgerError, LedgerResult};

fn storage_error(action: &str, path: &Path, err: impl Display) -> LedgerError {
    LedgerError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Load a JSON document, or `T::default()` if it has never been written
pub fn load_json<T>(path: &Path) -> LedgerResult<T>
where
    T: DeserializeOwned + Default,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// `path` with `suffix` appended to the full file name
fn staging_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

fn write_staged<T: Serialize + ?Sized>(staging: &Path, data: &T) -> LedgerResult<()> {
    let file = File::create(staging).map_err(|e| storage_error("create", staging, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize into", staging, e))?;
    writer.flush().map_err(|e| storage_error("flush", staging, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", staging, e))
}

/// Replace the document at `path` with `data`
///
/// The new contents go to `<path><staging_suffix>` first. On any failure the
/// staged file is removed and `path` keeps its previous contents.
pub fn replace_json<T: Serialize + ?Sized>(path: &Path, staging_suffix: &str, data: &T) -> LedgerResult<()> {
    let staging = staging_path(path, staging_suffix);

    let result = write_staged(&staging, data)
        .and_then(|()| fs::rename(&staging, path).map_err(|e| storage_error("replace", path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}
