use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Version control metadata never copied out of a template.
const DEFAULT_IGNORE_PATTERNS: &[&str] =
    &[".git", ".git/**", ".hg", ".hg/**", ".svn", ".svn/**", "**/.DS_Store"];

/// Builds the set of patterns excluded when copying a template tree.
///
/// Patterns match paths relative to the template root.
pub fn build_ignore_set() -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        debug!("Adding ignore pattern: {pattern} to globset");
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}
