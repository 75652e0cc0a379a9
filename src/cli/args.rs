use crate::constants::verbosity;
use crate::fetcher::FetchStrategy;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

/// Languages with a template root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Py3,
}

impl Language {
    /// Name of the language's template root folder.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Py3 => "py3",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CLI arguments for sprout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Folder holding the language template roots [default: current directory].
    #[arg(short = 'C', long = "templates-dir", value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new project from a template.
    Clone(CloneArgs),
    /// List the templates available for a language.
    List(ListArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CloneArgs {
    /// The programming language the new project will be written in.
    #[arg(value_enum)]
    pub language: Language,

    /// The name of the template to clone, `group/name` inside a group.
    pub template: String,

    /// The folder for the new project.
    pub destination: PathBuf,

    /// The name of the project. Defaults to using the destination folder name.
    pub project_name: Option<String>,

    /// How the template is duplicated into the destination.
    #[arg(long, value_enum, default_value_t = FetchStrategy::Git)]
    pub fetcher: FetchStrategy,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// The programming language to list project templates for.
    pub language: String,

    /// Print the listing as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse command line arguments, exiting with a usage error when they are invalid.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
