//! Stamps a freshly fetched project with its name.
//!
//! Every visible regular file under the project folder is rewritten in place with
//! each [`PROJECT_NAME_SENTINEL`] replaced by the normalized project name. File
//! names are left untouched and no backup is kept.

use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::constants::PROJECT_NAME_SENTINEL;
use crate::error::Result;
use crate::walker::list_recursive;

/// Summary of an initialization pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    /// Regular files rewritten.
    pub files_visited: usize,
    /// Files that contained the sentinel at least once.
    pub files_patched: usize,
    /// Total sentinel occurrences replaced.
    pub replacements: usize,
}

/// Replaces every hyphen with an underscore.
pub fn normalize_project_name(name: &str) -> String {
    name.replace('-', "_")
}

/// Rewrites `file_path` in place with every sentinel replaced by `name`.
///
/// The file is read whole as UTF-8 text, so binary content is reported as an
/// error rather than mangled.
///
/// # Returns
/// * `Result<usize>` - Number of sentinels replaced
pub fn patch_project_name<P: AsRef<Path>>(file_path: P, name: &str) -> Result<usize> {
    let mut file = OpenOptions::new().read(true).write(true).open(file_path.as_ref())?;

    let mut whole_text = String::new();
    file.read_to_string(&mut whole_text)?;
    let occurrences = whole_text.matches(PROJECT_NAME_SENTINEL).count();
    let replaced_text = whole_text.replace(PROJECT_NAME_SENTINEL, name);

    file.seek(SeekFrom::Start(0))?;
    file.set_len(0)?;
    file.write_all(replaced_text.as_bytes())?;
    Ok(occurrences)
}

/// Replaces the sentinel in every file under `destination`.
///
/// Hidden files and folders are skipped, and so are symlinks: their target may
/// live outside the project. The first failing file aborts the pass and leaves
/// already rewritten files as they are.
///
/// # Arguments
/// * `destination` - Root of the freshly fetched project
/// * `project_name` - Raw project name, normalized before substitution
pub fn init_project<P: AsRef<Path>>(destination: P, project_name: &str) -> Result<InitReport> {
    let name = normalize_project_name(project_name);
    let mut report = InitReport::default();

    for file in list_recursive(destination.as_ref(), None)? {
        if !fs::symlink_metadata(&file)?.file_type().is_file() {
            log::trace!("skipping non-regular file '{}'", file.display());
            continue;
        }
        log::debug!("patching file '{}'", file.display());

        let replaced = patch_project_name(&file, &name)
            .inspect_err(|e| log::warn!("Failed to patch '{}': {e}", file.display()))?;

        report.files_visited += 1;
        if replaced > 0 {
            report.files_patched += 1;
            report.replacements += replaced;
        }
    }

    Ok(report)
}
