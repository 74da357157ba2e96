// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::BabyMagicConfig;

pub fn default_log_path(file: &str) -> PathBuf {
    let base = std::env::var_os("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    base.join("babymagic").join(file)
}

pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Where confirmed crops are written.
///
/// Priority:
/// 1) $BABYMAGIC_DIR (if set and non-empty)
/// 2) config babymagic.output_directory (if non-empty)
/// 3) $XDG_RUNTIME_DIR
/// 4) /tmp
pub fn output_dir_from_cfg(cfg: &BabyMagicConfig) -> PathBuf {
    if let Some(v) = std::env::var_os("BABYMAGIC_DIR") {
        let p = PathBuf::from(v);
        if !p.as_os_str().is_empty() {
            return p;
        }
    }

    let p = cfg.output_directory.clone();
    if !p.as_os_str().is_empty() {
        return p;
    }

    std::env::var_os("XDG_RUNTIME_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

pub fn default_output_path(cfg: &BabyMagicConfig, ext: &str) -> PathBuf {
    let base = output_dir_from_cfg(cfg);

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    base.join(format!("babymagic-{ts}.{ext}"))
}
