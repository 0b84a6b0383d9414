//! `storydocs build` command implementation.

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Args;
use storydocs_config::CliSettings;
use storydocs_core::{ExampleRegistry, RenderContext, component_id};

use super::{FormatArg, Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    #[command(flatten)]
    project: ProjectArgs,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            output_dir: self.output_dir,
            format: self.format.map(Into::into),
            ..CliSettings::default()
        };
        let project = Project::load(self.project, settings)?;
        let output_dir = &project.config.output_resolved.dir;
        let extension = project.config.output_resolved.format.extension();

        output.detail("Manifest", project.config.manifest_path.display());
        output.detail("Output", output_dir.display());
        output.detail("Format", project.config.output_resolved.format);

        let paths = project.registry.component_paths();
        let pages = page_ids(&paths)?;

        std::fs::create_dir_all(output_dir)?;

        for (path, id) in &pages {
            let ctx = RenderContext::for_component(&project.registry, &project.hooks, path);
            let rendered = project.render(&ctx)?;

            let file = output_dir.join(format!("{id}.{extension}"));
            std::fs::write(&file, rendered)?;
            tracing::info!(component_path = %path, file = %file.display(), "Wrote page");
        }

        if paths.is_empty() {
            output.warning("No components found in manifest");
        } else {
            output.success(&format!(
                "Built {} pages to {}",
                paths.len(),
                output_dir.display()
            ));
        }
        Ok(())
    }
}

/// Page file id for every component path.
///
/// Fails before anything is written when a path has an empty id or two
/// paths share one.
fn page_ids<'a>(paths: &[&'a str]) -> Result<Vec<(&'a str, String)>, CliError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(paths.len());
    let mut pages = Vec::with_capacity(paths.len());
    for &path in paths {
        let id = component_id(path);
        if id.is_empty() {
            return Err(CliError::EmptyPageId(path.to_owned()));
        }
        if let Some(first) = seen.insert(id.clone(), path) {
            return Err(CliError::PageFileConflict {
                first: first.to_owned(),
                second: path.to_owned(),
                id,
            });
        }
        pages.push((path, id));
    }
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn build_args(dir: &std::path::Path) -> BuildArgs {
        std::fs::write(dir.join("storydocs.toml"), "").unwrap();
        BuildArgs {
            output_dir: Some(dir.join("out")),
            format: None,
            project: ProjectArgs {
                config: Some(dir.join("storydocs.toml")),
                manifest: None,
            },
        }
    }

    #[test]
    fn test_page_ids() {
        let pages = page_ids(&["Forms/Button", "Forms/Input"]).unwrap();
        assert_eq!(
            pages,
            vec![
                ("Forms/Button", "forms-button".to_owned()),
                ("Forms/Input", "forms-input".to_owned()),
            ]
        );
    }

    #[test]
    fn test_page_ids_conflict() {
        let err = page_ids(&["Forms/Button", "Forms.Button"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Components Forms/Button and Forms.Button both map to page file forms-button"
        );
    }

    #[test]
    fn test_page_ids_empty() {
        let err = page_ids(&["???"]).unwrap_err();
        assert!(matches!(err, CliError::EmptyPageId(path) if path == "???"));
    }

    #[test]
    fn test_build_writes_one_file_per_component() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stories.yaml"),
            "components:\n  - path: Forms/Button\n    examples:\n      - name: Primary\n  - path: Forms/Input\n",
        )
        .unwrap();

        build_args(dir.path()).execute().unwrap();

        let out = dir.path().join("out");
        assert!(out.join("forms-button.html").exists());
        assert!(out.join("forms-input.html").exists());
    }

    #[test]
    fn test_build_rejects_colliding_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("stories.yaml"),
            "components:\n  - path: Forms/Button\n  - path: Forms.Button\n",
        )
        .unwrap();

        let err = build_args(dir.path()).execute().unwrap_err();
        assert!(matches!(err, CliError::PageFileConflict { .. }));
        assert!(!dir.path().join("out").exists());
    }
}
