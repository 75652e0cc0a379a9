use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;
use crate::ext::PathExt;

/// Lists the entries under `root`, recursing at most `max_depth` levels.
///
/// Every non-directory entry found at a depth of `max_depth` or less is returned.
/// Directories are descended into rather than returned, except for those sitting
/// exactly at `max_depth`, which are returned as-is. With `max_depth` of `None` the
/// whole tree is walked and only non-directory entries come back. `Some(0)` returns
/// `root` itself.
///
/// Entries whose name starts with a dot are skipped and hidden directories are
/// never entered. Each path appears once; siblings are visited in file name order.
///
/// # Arguments
/// * `root` - Directory to walk
/// * `max_depth` - Optional recursion limit, `None` for unbounded
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The collected entries, or an error if `root` is
///   missing, unreadable or not a directory
pub fn list_recursive<P: AsRef<Path>>(
    root: P,
    max_depth: Option<usize>,
) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if max_depth == Some(0) {
        return Ok(vec![root.to_path_buf()]);
    }

    if !fs::metadata(root)?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a directory", root.display()),
        )
        .into());
    }

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.path().is_hidden())
    {
        let entry = entry?;
        let at_depth_limit = max_depth == Some(entry.depth());
        if !entry.file_type().is_dir() || at_depth_limit {
            log::trace!("Found entry '{}'", entry.path().display());
            entries.push(entry.into_path());
        }
    }

    Ok(entries)
}
