pub mod args;
pub mod runner;

pub use args::{get_log_level_from_verbose, parse_cli, Cli, CloneArgs, Commands, Language, ListArgs};
pub use runner::{run, Runner};
