use crate::constants::STAGING_PREFIX;
use crate::error::{Error, Result};
use crate::fetcher::interface::TemplateFetcher;
use crate::ignore::build_ignore_set;
use crate::ioutils::{copy_file, create_dir_all, ensure_vacant};
use globset::GlobSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Fetcher that copies the template folder without going through git.
///
/// The tree is first copied into a staging folder next to the destination and
/// only moved into place once every file made it, so a failed copy leaves
/// nothing behind. Version control metadata is not copied.
pub struct CopyFetcher {
    ignored: GlobSet,
}

impl CopyFetcher {
    pub fn new() -> Result<Self> {
        Ok(Self { ignored: build_ignore_set()? })
    }

    fn copy_tree(&self, source: &Path, target: &Path) -> Result<()> {
        create_dir_all(target)?;

        let walker = WalkDir::new(source)
            .min_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| match e.path().strip_prefix(source) {
                Ok(relative) => !self.ignored.is_match(relative),
                Err(_) => true,
            });

        for entry in walker {
            let entry = entry?;
            let relative =
                entry.path().strip_prefix(source).map_err(|e| Error::FetchFailed {
                    command: format!("copy {}", source.display()),
                    output: e.to_string(),
                })?;
            let destination = target.join(relative);

            if entry.file_type().is_dir() {
                create_dir_all(&destination)?;
            } else {
                log::trace!("Copying '{}'", relative.display());
                copy_file(entry.path(), destination.as_path())?;
            }
        }
        Ok(())
    }
}

impl TemplateFetcher for CopyFetcher {
    fn fetch(&self, source: &Path, destination: &Path) -> Result<()> {
        ensure_vacant(destination)?;

        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        create_dir_all(parent)?;

        let staging = tempfile::Builder::new().prefix(STAGING_PREFIX).tempdir_in(parent)?;
        let staged_tree = staging.path().join("tree");
        log::debug!(
            "Copying '{}' into staging folder '{}'",
            source.display(),
            staged_tree.display()
        );
        self.copy_tree(source, &staged_tree)?;

        if destination.exists() {
            fs::remove_dir(destination)?;
        }
        fs::rename(&staged_tree, destination)?;
        Ok(())
    }
}
