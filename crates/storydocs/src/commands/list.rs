//! `storydocs list` command implementation.

use std::io::{self, Write};

use clap::Args;
use storydocs_config::CliSettings;
use storydocs_core::ExampleRegistry;

use super::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    project: ProjectArgs,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(self.project, CliSettings::default())?;

        let paths = project.registry.component_paths();
        if paths.is_empty() {
            output.warning("No components found in manifest");
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        for path in &paths {
            writeln!(stdout, "{path}")?;
            for example in project.registry.examples_for_path(path) {
                if example.docs_disabled() {
                    writeln!(stdout, "  {} (docs disabled)", example.id)?;
                } else {
                    writeln!(stdout, "  {}", example.id)?;
                }
            }
        }

        output.detail("Components", paths.len());
        output.detail("Examples", project.registry.len());
        Ok(())
    }
}
