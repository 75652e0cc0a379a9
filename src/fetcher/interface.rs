use crate::error::Result;
use std::path::Path;

/// Trait for materializing a template into a new project folder.
pub trait TemplateFetcher {
    /// Duplicates the template tree at `source` into `destination`.
    ///
    /// Implementations must leave no partially populated `destination` behind
    /// when they fail.
    ///
    /// # Returns
    /// * `Result<()>` - Error when the duplication could not complete
    fn fetch(&self, source: &Path, destination: &Path) -> Result<()>;
}
