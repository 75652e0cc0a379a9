use crate::error::Result;
use clap::ValueEnum;
use std::fmt::Display;

pub mod copy;
pub mod git;
pub mod interface;

pub use copy::CopyFetcher;
pub use git::GitFetcher;
pub use interface::TemplateFetcher;

/// How a template gets duplicated into the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// `git clone` the template folder.
    #[default]
    Git,
    /// Copy the template folder, leaving version control metadata behind.
    Copy,
}

impl Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FetchStrategy::Git => "git",
            FetchStrategy::Copy => "copy",
        };
        write!(f, "{s}")
    }
}

/// Creates the fetcher implementing `strategy`.
pub fn get_fetcher(strategy: FetchStrategy) -> Result<Box<dyn TemplateFetcher>> {
    log::debug!("Using the {strategy} fetcher");
    Ok(match strategy {
        FetchStrategy::Git => Box::new(GitFetcher::new()),
        FetchStrategy::Copy => Box::new(CopyFetcher::new()?),
    })
}
