//! Template discovery for a language's template root.
//!
//! Every immediate subdirectory of a template root is either a *leaf template*,
//! which can be cloned directly, or a *group* holding leaf templates next to
//! optional README files. Nothing is persisted: the classification is derived
//! from the folder contents each time it is asked for.

use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::constants::README_PREFIX;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::walker::list_recursive;

/// A cloneable template as reported by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Containing group, when the template lives inside one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub name: String,
}

impl TemplateEntry {
    pub fn leaf<S: Into<String>>(name: S) -> Self {
        Self { group: None, name: name.into() }
    }

    pub fn grouped<S: Into<String>>(group: S, name: S) -> Self {
        Self { group: Some(group.into()), name: name.into() }
    }
}

impl Display for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.group {
            Some(group) => write!(f, "{group}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// What a template root subdirectory turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateKind {
    /// Holds at least one file that isn't a README.
    Leaf,
    /// Holds only README files and the listed sub-template folders.
    Group(Vec<PathBuf>),
}

fn is_readme(path: &Path) -> bool {
    path.base_name()
        .map(|name| name.to_lowercase().starts_with(README_PREFIX))
        .unwrap_or(false)
}

/// Classifies `folder` by looking at its immediate, non-hidden children.
pub fn classify<P: AsRef<Path>>(folder: P) -> Result<TemplateKind> {
    let children = list_recursive(folder.as_ref(), Some(1))?;
    let (files, folders): (Vec<PathBuf>, Vec<PathBuf>) =
        children.into_iter().partition(|child| child.is_file());

    if files.iter().any(|file| !is_readme(file)) {
        return Ok(TemplateKind::Leaf);
    }

    Ok(TemplateKind::Group(folders.into_iter().filter(|f| f.is_dir()).collect()))
}

/// Lists every template under `language_root`, expanding groups one level.
///
/// # Arguments
/// * `language_root` - The `<base>/<language>` folder
///
/// # Returns
/// * `Result<Vec<TemplateEntry>>` - Entries sorted by their `group/name` form,
///   or [`Error::MissingLanguageRoot`] when the folder doesn't exist
pub fn list_templates<P: AsRef<Path>>(language_root: P) -> Result<Vec<TemplateEntry>> {
    let language_root = language_root.as_ref();
    if !language_root.is_dir() {
        return Err(Error::MissingLanguageRoot {
            language_root: language_root.display().to_string(),
        });
    }

    let mut entries = Vec::new();
    for folder in list_recursive(language_root, Some(1))? {
        if !folder.is_dir() {
            continue;
        }
        let Some(template_name) = folder.base_name() else { continue };

        match classify(&folder)? {
            TemplateKind::Leaf => {
                log::debug!("'{template_name}' is a template");
                entries.push(TemplateEntry::leaf(template_name));
            }
            TemplateKind::Group(subtemplates) => {
                log::debug!(
                    "'{template_name}' is a group of {} template(s)",
                    subtemplates.len()
                );
                entries.extend(subtemplates.iter().filter_map(|sub| {
                    sub.base_name().map(|name| TemplateEntry::grouped(template_name.clone(), name))
                }));
            }
        }
    }

    entries.sort_by_key(|entry| entry.to_string());
    Ok(entries)
}
