use std::path::{Component, Path, PathBuf};

use crate::catalog::{list_templates, TemplateEntry};
use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::fetcher::TemplateFetcher;
use crate::initializer::{init_project, normalize_project_name, InitReport};

/// Everything `clone` needs to create a project.
#[derive(Debug, Clone)]
pub struct CloneRequest {
    pub language: String,
    /// Template name, `group/name` for templates inside a group.
    pub template: String,
    pub destination: PathBuf,
    /// Overrides the destination folder name as project name.
    pub project_name: Option<String>,
}

/// Result of a successful `clone`.
#[derive(Debug)]
pub struct CloneOutcome {
    pub destination: PathBuf,
    /// Name written into the project files, already normalized.
    pub project_name: String,
    pub report: InitReport,
}

/// The folder holding one template root per language.
#[derive(Debug, Clone)]
pub struct Workspace {
    base: PathBuf,
}

impl Workspace {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        Self { base: base.into() }
    }

    /// Workspace rooted at the process working directory.
    pub fn current() -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn language_root(&self, language: &str) -> PathBuf {
        self.base.join(language)
    }

    /// Resolves `<base>/<language>/<template>`, failing unless it is a folder.
    ///
    /// Templates must stay inside the language root, so absolute names and
    /// `..` components are rejected.
    pub fn validate_template(&self, language: &str, template: &str) -> Result<PathBuf> {
        let unknown = || Error::UnknownTemplate { template: format!("{language}/{template}") };

        let relative = Path::new(template);
        if template.is_empty()
            || !relative.components().all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(unknown());
        }

        let template_folder = self.language_root(language).join(relative);
        if template_folder.is_dir() {
            Ok(template_folder)
        } else {
            Err(unknown())
        }
    }

    /// Lists the templates available for `language`.
    pub fn list(&self, language: &str) -> Result<Vec<TemplateEntry>> {
        list_templates(self.language_root(language))
    }

    /// Fetches a template into a new project and stamps it with its name.
    ///
    /// The stages run in order and stop at the first failure:
    /// 1. the template must exist ([`Error::UnknownTemplate`]), nothing is created otherwise
    /// 2. the fetcher duplicates it ([`Error::FetchFailed`])
    /// 3. sentinels are replaced ([`Error::InitFailed`]), the project stays on disk
    pub fn clone_project(
        &self,
        request: &CloneRequest,
        fetcher: &dyn TemplateFetcher,
    ) -> Result<CloneOutcome> {
        let template_folder = self.validate_template(&request.language, &request.template)?;
        let destination = request.destination.clone();
        let raw_name = match &request.project_name {
            Some(name) => name.clone(),
            None => destination.base_name().ok_or_else(|| Error::InvalidDestination {
                destination: destination.display().to_string(),
            })?,
        };

        log::debug!(
            "Fetching '{}' into '{}'",
            template_folder.display(),
            destination.display()
        );
        fetcher.fetch(&template_folder, &destination).map_err(|e| match e {
            Error::FetchFailed { .. } => e,
            other => Error::FetchFailed {
                command: format!(
                    "fetch {} {}",
                    template_folder.display(),
                    destination.display()
                ),
                output: other.to_string(),
            },
        })?;

        log::debug!("Initializing '{}' as '{raw_name}'", destination.display());
        let report = init_project(&destination, &raw_name).map_err(|e| Error::InitFailed {
            destination: destination.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(CloneOutcome { destination, project_name: normalize_project_name(&raw_name), report })
    }
}
