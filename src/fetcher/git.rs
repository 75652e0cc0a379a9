use crate::error::{Error, Result};
use crate::fetcher::interface::TemplateFetcher;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

/// Fetcher that runs `git clone <template> <destination>`.
///
/// Git refuses non-empty destinations and cleans up after a failed clone, so the
/// destination rules of [`TemplateFetcher`] are enforced by git itself.
pub struct GitFetcher {
    program: OsString,
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GitFetcher {
    /// Creates a GitFetcher using the `git` found on `PATH`.
    pub fn new() -> Self {
        Self { program: OsString::from("git") }
    }

    /// Creates a GitFetcher running a specific git executable.
    pub fn with_program<S: Into<OsString>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn command_line(&self, source: &Path, destination: &Path) -> String {
        format!(
            "{} clone {} {}",
            self.program.to_string_lossy(),
            source.display(),
            destination.display()
        )
    }
}

impl TemplateFetcher for GitFetcher {
    /// Clones the template, capturing the command output for diagnostics.
    ///
    /// # Returns
    /// * `Result<()>` - [`Error::FetchFailed`] carrying stdout followed by stderr
    ///   when git can't be started or exits non-zero
    fn fetch(&self, source: &Path, destination: &Path) -> Result<()> {
        let command = self.command_line(source, destination);
        log::debug!("Running '{command}'");

        let output = Command::new(&self.program)
            .arg("clone")
            .arg(source)
            .arg(destination)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::FetchFailed { command: command.clone(), output: e.to_string() })?;

        if !output.status.success() {
            let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
            combined.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::FetchFailed { command, output: combined.trim_end().to_string() });
        }

        log::trace!("{}", String::from_utf8_lossy(&output.stderr).trim_end());
        Ok(())
    }
}
