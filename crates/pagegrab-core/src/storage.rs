//! Destination resolution and page persistence.
//!
//! Each unit of work writes `<dst>/<label>.html`, created or truncated, with
//! the raw response bytes verbatim. The destination directory is created
//! idempotently so racing tasks tolerate concurrent creation.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory substituted for the literal destination `./`.
pub const DOT_SLASH_REDIRECT: &str = "./list";

/// Resolves the user-supplied destination directory. The literal `./` is
/// redirected to `./list`; every other value (including `.`) is kept as-is.
pub fn resolve_dest_dir(dst: &Path) -> PathBuf {
    if dst.as_os_str() == "./" {
        PathBuf::from(DOT_SLASH_REDIRECT)
    } else {
        dst.to_path_buf()
    }
}

/// Writes `body` to `<dir>/<label>.html` and returns the written path.
///
/// Creates `dir` if missing. The file is created or truncated; concurrent
/// writers for the same label race with no defined winner.
pub fn save_page(dir: &Path, label: &str, body: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("error creating folder {}", dir.display()))?;

    let path = dir.join(format!("{}.html", label));
    fs::write(&path, body)
        .with_context(|| format!("error creating destination file {}", path.display()))?;
    Ok(path)
}
