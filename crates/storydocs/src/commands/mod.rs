//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod list;
pub(crate) mod page;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde_json::{Map, Value, json};
use storydocs_config::{CliSettings, Config, HierarchyConfig, OutputFormat};
use storydocs_core::{
    DocsHooks, DocsPage, InMemoryRegistry, Manifest, PageRenderer, RenderContext,
};
use storydocs_render::{HtmlRenderer, JsonRenderer};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use list::ListArgs;
pub(crate) use page::PageArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Path to configuration file (default: auto-discover storydocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Example manifest (overrides config).
    #[arg(short, long, env = "STORYDOCS_MANIFEST")]
    manifest: Option<PathBuf>,
}

/// Page format accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Html,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Loaded configuration, registry and collaborators.
pub(crate) struct Project {
    pub(crate) config: Config,
    pub(crate) registry: InMemoryRegistry,
    pub(crate) hooks: DocsHooks,
}

impl Project {
    /// Load configuration and the example manifest it points to.
    pub(crate) fn load(args: ProjectArgs, settings: CliSettings) -> Result<Self, CliError> {
        let settings = CliSettings {
            manifest: args.manifest,
            ..settings
        };
        let config = Config::load(args.config.as_deref(), Some(&settings))?;

        if !config.manifest_path.exists() {
            return Err(CliError::Validation(format!(
                "Manifest not found: {}",
                config.manifest_path.display()
            )));
        }

        let manifest = Manifest::load(&config.manifest_path)?
            .with_default_parameters(hierarchy_defaults(&config.hierarchy));
        let (registry, hooks) = manifest.into_parts()?;

        tracing::info!(
            manifest = %config.manifest_path.display(),
            examples = registry.len(),
            "Loaded manifest"
        );

        Ok(Self {
            config,
            registry,
            hooks,
        })
    }

    /// Assemble and render one page in the configured format.
    pub(crate) fn render(&self, ctx: &RenderContext<'_>) -> Result<String, CliError> {
        let page = DocsPage::new().assemble(ctx);
        match self.config.output_resolved.format {
            OutputFormat::Html => Ok(self.html_renderer().render_document(&page)),
            OutputFormat::Json => Ok(JsonRenderer.render(&page)?),
        }
    }

    fn html_renderer(&self) -> HtmlRenderer {
        match &self.config.output_resolved.preview_url {
            Some(url) => HtmlRenderer::new().with_preview_url(url.as_str()),
            None => HtmlRenderer::new(),
        }
    }
}

/// Global `options` parameters for the configured hierarchy settings.
///
/// Returns `null` when nothing is configured so manifest parameters stand
/// alone.
fn hierarchy_defaults(hierarchy: &HierarchyConfig) -> Value {
    if hierarchy.is_empty() {
        return Value::Null;
    }

    let mut options = Map::new();
    if let Some(show_roots) = hierarchy.show_roots {
        options.insert("showRoots".to_owned(), Value::Bool(show_roots));
    }
    if let Some(separator) = &hierarchy.root_separator {
        options.insert("hierarchyRootSeparator".to_owned(), json!(separator));
    }
    if let Some(separator) = &hierarchy.separator {
        options.insert("hierarchySeparator".to_owned(), json!(separator));
    } else if let Some(pattern) = &hierarchy.separator_pattern {
        options.insert(
            "hierarchySeparator".to_owned(),
            json!({ "pattern": pattern }),
        );
    }

    json!({ "options": options })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hierarchy_defaults_empty() {
        assert_eq!(hierarchy_defaults(&HierarchyConfig::default()), Value::Null);
    }

    #[test]
    fn test_hierarchy_defaults_literal() {
        let hierarchy = HierarchyConfig {
            show_roots: Some(false),
            root_separator: Some("::".to_owned()),
            separator: Some("/".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            hierarchy_defaults(&hierarchy),
            json!({
                "options": {
                    "showRoots": false,
                    "hierarchyRootSeparator": "::",
                    "hierarchySeparator": "/"
                }
            })
        );
    }

    #[test]
    fn test_hierarchy_defaults_pattern() {
        let hierarchy = HierarchyConfig {
            separator_pattern: Some("-|_".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            hierarchy_defaults(&hierarchy),
            json!({ "options": { "hierarchySeparator": { "pattern": "-|_" } } })
        );
    }

    #[test]
    fn test_project_load_and_render() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storydocs.toml"),
            "[hierarchy]\nseparator = \"-\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("stories.yaml"),
            "components:\n  - path: Forms-Button\n    examples:\n      - name: Primary\n",
        )
        .unwrap();

        let args = ProjectArgs {
            config: Some(dir.path().join("storydocs.toml")),
            manifest: None,
        };
        let project = Project::load(args, CliSettings::default()).unwrap();
        let ctx = RenderContext::for_component(&project.registry, &project.hooks, "Forms-Button");
        let rendered = project.render(&ctx).unwrap();

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["title"], json!("Button"));
        assert_eq!(value["primary"]["id"], json!("forms-button--primary"));
    }

    #[test]
    fn test_project_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("storydocs.toml"), "").unwrap();

        let args = ProjectArgs {
            config: Some(dir.path().join("storydocs.toml")),
            manifest: None,
        };
        let Err(err) = Project::load(args, CliSettings::default()) else {
            panic!("expected missing manifest error");
        };
        assert!(err.to_string().starts_with("Manifest not found: "));
    }
}
