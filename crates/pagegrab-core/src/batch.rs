//! The batch runner: line-oriented dispatch with unbounded fan-out.
//!
//! One thread per non-blank input line, no pool and no cap; the run returns
//! once every unit of work has been joined. Per-URL failures are logged and
//! isolated to their task.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::thread;

use crate::fetch::{self, FetchOptions};
use crate::label;
use crate::storage;

/// Fetches every URL listed in `src` (one per line, whitespace trimmed,
/// blank lines skipped) and saves each response body under `dst` as
/// `<label>.html`.
///
/// Fatal errors: the source file cannot be opened or read, or the resolved
/// destination directory cannot be created. Everything else (malformed URL,
/// network failure, non-OK status, file write failure) is logged per URL and
/// the batch continues. No aggregate count is reported.
pub fn run(src: &Path, dst: &Path, options: &FetchOptions) -> Result<()> {
    let file = File::open(src)
        .with_context(|| format!("error opening source file {}", src.display()))?;

    let dest_dir = storage::resolve_dest_dir(dst);
    std::fs::create_dir_all(&dest_dir)
        .with_context(|| format!("error creating folder {}", dest_dir.display()))?;

    let mut handles = Vec::new();
    for line in BufReader::new(file).lines() {
        let line =
            line.with_context(|| format!("error reading source file {}", src.display()))?;
        let url = line.trim().to_string();
        if url.is_empty() {
            continue;
        }

        let dest_dir = dest_dir.clone();
        let options = options.clone();
        handles.push(thread::spawn(move || grab_one(&url, &dest_dir, &options)));
    }

    tracing::debug!("dispatched {} unit(s) of work", handles.len());
    for handle in handles {
        if handle.join().is_err() {
            tracing::warn!("a unit of work panicked");
        }
    }
    Ok(())
}

/// One unit of work: derive the label, GET the page, persist the body.
fn grab_one(url: &str, dest_dir: &Path, options: &FetchOptions) {
    let label = match label::derive_label(url) {
        Ok(label) => label,
        Err(err) => {
            tracing::warn!("{:#}", err);
            return;
        }
    };

    let body = match fetch::fetch_page(url, options) {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("{}", err);
            return;
        }
    };

    match storage::save_page(dest_dir, &label, &body) {
        Ok(path) => println!("File copied successfully to {}", path.display()),
        Err(err) => tracing::warn!("{:#}", err),
    }
}
