//! Constants used throughout sprout

/// Placeholder replaced with the project name in every cloned file.
pub const PROJECT_NAME_SENTINEL: &str = "{%PROJECT_NAME%}";

/// Files whose name starts with this (case-insensitive) don't make a folder a template.
pub const README_PREFIX: &str = "readme";

/// Leading character of hidden entries skipped by the tree walker.
pub const HIDDEN_MARKER: char = '.';

/// Prefix of the staging folder used while copying a template.
pub const STAGING_PREFIX: &str = ".sprout-";

/// Exit codes
pub mod exit_codes {
    /// Unknown template, fetch failure or missing language root.
    pub const FAILURE: i32 = 1;
    pub const INIT_FAILURE: i32 = 2;
}

/// Verbosity levels
pub mod verbosity {
    pub const INFO: u8 = 0;
    pub const DEBUG: u8 = 1;
    pub const TRACE: u8 = 2;
}
