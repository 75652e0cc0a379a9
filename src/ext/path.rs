use std::path::Path;

use crate::constants::HIDDEN_MARKER;

/// Extension trait for Path with the name queries sprout relies on.
pub trait PathExt {
    /// Returns `true` when the final component starts with a dot.
    ///
    /// Paths without a final component (`/`, `..`) are never hidden.
    ///
    /// # Examples
    /// ```
    /// use sprout::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("project/.git").is_hidden());
    /// assert!(!Path::new("project/src").is_hidden());
    /// ```
    fn is_hidden(&self) -> bool;

    /// Returns the final component as an owned String, lossily converted.
    ///
    /// # Examples
    /// ```
    /// use sprout::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert_eq!(Path::new("work/my-proj").base_name().as_deref(), Some("my-proj"));
    /// ```
    fn base_name(&self) -> Option<String>;
}

impl PathExt for Path {
    fn is_hidden(&self) -> bool {
        self.file_name()
            .map(|name| name.to_string_lossy().starts_with(HIDDEN_MARKER))
            .unwrap_or(false)
    }

    fn base_name(&self) -> Option<String> {
        self.file_name().map(|name| name.to_string_lossy().into_owned())
    }
}
