//! File-backed cookie jar, the only session-carrying state.
//!
//! DirectAdmin hands out a plain session cookie, so the jar is saved including
//! non-persistent cookies. The file is re-read before and rewritten after
//! every request, and outlives the process like the curl cookie jar it
//! replaces.

use anyhow::{anyhow, Context, Result};
use reqwest_cookie_store::{CookieStore, CookieStoreMutex};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Load the jar from disk, or start empty when the file does not exist yet.
pub(crate) fn load(path: &Path) -> Result<CookieStore> {
    if !path.exists() {
        return Ok(CookieStore::default());
    }
    let reader = BufReader::new(
        File::open(path)
            .with_context(|| format!("failed to open cookie file {}", path.display()))?,
    );
    CookieStore::load_json_all(reader)
        .map_err(|err| anyhow!("failed to read cookie file {}: {err}", path.display()))
}

/// Replace the live store with whatever is on disk.
pub(crate) fn reload(jar: &CookieStoreMutex, path: &Path) -> Result<()> {
    let store = load(path)?;
    let mut guard = jar
        .lock()
        .map_err(|_| anyhow!("cookie store lock poisoned"))?;
    *guard = store;
    Ok(())
}

/// Overwrite the jar file with the current store, session cookies included.
pub(crate) fn persist(jar: &CookieStoreMutex, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(
        File::create(path)
            .with_context(|| format!("failed to write cookie file {}", path.display()))?,
    );
    let guard = jar
        .lock()
        .map_err(|_| anyhow!("cookie store lock poisoned"))?;
    guard
        .save_incl_expired_and_nonpersistent_json(&mut writer)
        .map_err(|err| anyhow!("failed to write cookie file {}: {err}", path.display()))
}
