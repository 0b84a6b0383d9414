//! `storydocs page` command implementation.

use std::io::{self, Write};

use clap::Args;
use storydocs_config::CliSettings;
use storydocs_core::{ExampleRegistry, RenderContext};

use super::{FormatArg, Project, ProjectArgs};
use crate::error::CliError;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Component path (e.g. `Forms/Button`).
    path: String,

    /// Selected example id (default: first example of the component).
    #[arg(short, long)]
    example: Option<String>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    #[command(flatten)]
    project: ProjectArgs,
}

impl PageArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let settings = CliSettings {
            format: self.format.map(Into::into),
            ..CliSettings::default()
        };
        let project = Project::load(self.project, settings)?;

        if !project.registry.component_paths().contains(&self.path.as_str()) {
            return Err(CliError::UnknownComponent(self.path));
        }

        let ctx = match &self.example {
            Some(id) => {
                let ctx = RenderContext::for_example(&project.registry, &project.hooks, id)
                    .ok_or_else(|| CliError::UnknownExample(id.clone()))?;
                if ctx.component_path != self.path {
                    return Err(CliError::Validation(format!(
                        "Example {id} belongs to {}, not {}",
                        ctx.component_path, self.path
                    )));
                }
                ctx
            }
            None => RenderContext::for_component(&project.registry, &project.hooks, &self.path),
        };

        let rendered = project.render(&ctx)?;
        io::stdout().lock().write_all(rendered.as_bytes())?;
        Ok(())
    }
}
