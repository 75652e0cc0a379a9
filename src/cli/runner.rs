use crate::{
    catalog::TemplateEntry,
    cli::{Cli, CloneArgs, Commands, ListArgs},
    error::Result,
    fetcher::{get_fetcher, TemplateFetcher},
    ioutils::resolve_against,
    project::{CloneOutcome, CloneRequest, Workspace},
};
use clap::CommandFactory;
use std::io::Write;
use std::path::PathBuf;

/// Dispatches the `clone` and `list` commands against a workspace.
pub struct Runner<'a> {
    workspace: Workspace,
    /// Relative destinations are resolved against this folder.
    working_dir: PathBuf,
    /// Where `list` writes its results.
    out: &'a mut dyn Write,
}

impl<'a> Runner<'a> {
    pub fn new(workspace: Workspace, working_dir: PathBuf, out: &'a mut dyn Write) -> Self {
        Self { workspace, working_dir, out }
    }

    /// Creates a new project from a template using `fetcher`.
    pub fn clone_template(
        &mut self,
        args: &CloneArgs,
        fetcher: &dyn TemplateFetcher,
    ) -> Result<CloneOutcome> {
        let request = CloneRequest {
            language: args.language.to_string(),
            template: args.template.clone(),
            destination: resolve_against(&self.working_dir, &args.destination),
            project_name: args.project_name.clone(),
        };

        let outcome = self.workspace.clone_project(&request, fetcher)?;
        log::info!(
            "Project '{}' created in {} ({} file(s) updated).",
            outcome.project_name,
            outcome.destination.display(),
            outcome.report.files_patched
        );
        Ok(outcome)
    }

    /// Writes the templates available for a language, one per line or as JSON.
    pub fn list_templates(&mut self, args: &ListArgs) -> Result<Vec<TemplateEntry>> {
        let entries = self.workspace.list(&args.language)?;

        if args.json {
            serde_json::to_writer_pretty(&mut *self.out, &entries)?;
            writeln!(self.out)?;
        } else {
            for entry in &entries {
                writeln!(self.out, "{entry}")?;
            }
        }
        self.out.flush()?;
        Ok(entries)
    }
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let workspace = match &cli.templates_dir {
        Some(dir) => Workspace::new(resolve_against(&working_dir, dir)),
        None => Workspace::current()?,
    };
    log::debug!("Looking for templates in '{}'", workspace.base().display());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut runner = Runner::new(workspace, working_dir, &mut out);

    match &cli.command {
        Some(Commands::Clone(args)) => {
            let fetcher = get_fetcher(args.fetcher)?;
            runner.clone_template(args, fetcher.as_ref()).map(|_| ())
        }
        Some(Commands::List(args)) => runner.list_templates(args).map(|_| ()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
