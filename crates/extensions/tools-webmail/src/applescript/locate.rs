//! Process-wide cache of the `osascript` location.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::BridgeError;

const FALLBACK_OSASCRIPT: &str = "/usr/bin/osascript";

static OSASCRIPT_PATH: Lazy<RwLock<Option<PathBuf>>> = Lazy::new(|| RwLock::new(None));

/// Resolve the `osascript` binary, probing the host on first use.
///
/// A successful lookup is cached for the rest of the process. Failed lookups
/// are not cached, so a later call probes again.
pub fn osascript_path() -> Result<PathBuf, BridgeError> {
    resolve_cached(&OSASCRIPT_PATH, probe_osascript)
}

/// Forget the cached location so the next call probes again.
pub fn invalidate_osascript_path() {
    *OSASCRIPT_PATH.write() = None;
}

fn probe_osascript() -> Option<PathBuf> {
    which::which("osascript").ok().or_else(|| {
        let fallback = Path::new(FALLBACK_OSASCRIPT);
        fallback.exists().then(|| fallback.to_path_buf())
    })
}

fn resolve_cached<F>(cache: &RwLock<Option<PathBuf>>, probe: F) -> Result<PathBuf, BridgeError>
where
    F: FnOnce() -> Option<PathBuf>,
{
    if let Some(path) = cache.read().as_ref() {
        return Ok(path.clone());
    }

    let mut slot = cache.write();
    // Another caller may have filled the slot while we waited for the lock.
    if let Some(path) = slot.as_ref() {
        return Ok(path.clone());
    }

    let path = probe().ok_or(BridgeError::BridgeUnavailable)?;
    debug!(path = %path.display(), "Resolved osascript");
    *slot = Some(path.clone());
    Ok(path)
}
