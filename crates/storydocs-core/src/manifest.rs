//! YAML example manifest.
//!
//! A manifest lists components and their examples together with the
//! metadata the default resolvers consume:
//!
//! ```yaml
//! parameters:
//!   options:
//!     showRoots: false
//! components:
//!   - path: Forms/Button
//!     component: Button
//!     subtitle: Clickable call to action
//!     description: |
//!       Buttons trigger an action.
//!     props:
//!       - name: label
//!         type: { summary: string }
//!         required: true
//!     examples:
//!       - name: Primary
//!       - name: Disabled
//!         parameters:
//!           docs: { disable: true }
//! ```
//!
//! [`Manifest::into_parts`] turns it into an [`InMemoryRegistry`] and
//! [`DocsHooks`] answering description and property requests from the
//! manifest itself.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::context::{DescriptionExtractor, DocsHooks, PropDefsExtractor};
use crate::parameters::{ComponentRef, Parameters};
use crate::props::PropDef;
use crate::registry::{InMemoryRegistry, RegistryError, merge_parameters};

/// Parsed manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Global parameters applied to every example.
    pub parameters: Value,
    /// Components in registration order.
    pub components: Vec<ComponentManifest>,
}

/// One component and its examples.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentManifest {
    /// Component path (e.g. `Forms/Button`).
    pub path: String,
    /// Component reference; sets the `component` parameter.
    #[serde(default)]
    pub component: Option<String>,
    /// Sets the `componentSubtitle` parameter.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Markdown description returned by the description extractor.
    #[serde(default)]
    pub description: Option<String>,
    /// Property rows returned by the property extractor.
    #[serde(default)]
    pub props: Option<Vec<PropDef>>,
    /// Component-level parameters.
    #[serde(default)]
    pub parameters: Value,
    /// Examples in registration order.
    #[serde(default)]
    pub examples: Vec<ExampleManifest>,
}

/// One example.
#[derive(Debug, Deserialize)]
pub struct ExampleManifest {
    /// Display name.
    pub name: String,
    /// Explicit id; derived from path and name when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Sets the `docs.storyDescription` parameter.
    #[serde(default)]
    pub description: Option<String>,
    /// Example-level parameters.
    #[serde(default)]
    pub parameters: Value,
}

/// Manifest loading error.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("Invalid manifest: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Registration error.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl Manifest {
    /// Parse a manifest from YAML. Empty content yields an empty manifest.
    pub fn from_yaml(content: &str) -> Result<Self, ManifestError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(trimmed)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Apply default global parameters underneath the manifest's own.
    #[must_use]
    pub fn with_default_parameters(mut self, defaults: Value) -> Self {
        let mut parameters = defaults;
        merge_parameters(&mut parameters, &self.parameters);
        self.parameters = parameters;
        self
    }

    /// Build the registry and the manifest-backed collaborators.
    pub fn into_parts(self) -> Result<(InMemoryRegistry, DocsHooks), ManifestError> {
        let mut registry = InMemoryRegistry::new().with_global_parameters(self.parameters);
        let mut components = ManifestComponents::default();

        for entry in self.components {
            let mut parameters = entry.parameters;
            if let Some(component) = &entry.component {
                merge_parameters(
                    &mut parameters,
                    &object("component", Value::from(component.as_str())),
                );
            }
            if let Some(subtitle) = entry.subtitle {
                merge_parameters(
                    &mut parameters,
                    &object("componentSubtitle", Value::from(subtitle)),
                );
            }
            registry.add_component(&entry.path, parameters)?;

            match entry.component {
                Some(component) => {
                    if let Some(description) = entry.description {
                        components.descriptions.insert(component.clone(), description);
                    }
                    if let Some(props) = entry.props {
                        components.props.insert(component, props);
                    }
                }
                None if entry.description.is_some() || entry.props.is_some() => {
                    tracing::warn!(
                        path = %entry.path,
                        "Component description and props need a component reference, ignoring"
                    );
                }
                None => {}
            }

            for example in entry.examples {
                let mut parameters = example.parameters;
                if let Some(description) = example.description {
                    merge_parameters(
                        &mut parameters,
                        &object("docs", object("storyDescription", Value::from(description))),
                    );
                }
                registry.add_example(
                    &entry.path,
                    &example.name,
                    example.id.as_deref(),
                    parameters,
                )?;
            }
        }

        let components = Arc::new(components);
        let description_extractor = Arc::clone(&components);
        let hooks = DocsHooks {
            description_extractor: Some(description_extractor),
            prop_defs: Some(components),
        };
        Ok((registry, hooks))
    }
}

fn object(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_owned(), value);
    Value::Object(map)
}

/// Descriptions and property rows keyed by component reference.
#[derive(Debug, Default)]
struct ManifestComponents {
    descriptions: HashMap<String, String>,
    props: HashMap<String, Vec<PropDef>>,
}

impl DescriptionExtractor for ManifestComponents {
    fn extract(&self, component: &ComponentRef, _parameters: &Parameters) -> Option<String> {
        self.descriptions.get(component.as_str()).cloned()
    }
}

impl PropDefsExtractor for ManifestComponents {
    fn prop_defs(&self, component: &ComponentRef, _parameters: &Parameters) -> Vec<PropDef> {
        self.props
            .get(component.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::context::RenderContext;
    use crate::page::DocsPage;
    use crate::props::{PropSummary, PropertyTableSpec};
    use crate::registry::ExampleRegistry;

    const MANIFEST: &str = r"
parameters:
  framework: react
components:
  - path: Docs/PropRow
    component: PropRow
    subtitle: One row of a props table
    description: |
      Renders a single **prop**.
    props:
      - name: someString
        type: { summary: string }
        required: true
        description: someString description
        defaultValue: { summary: fixme }
      - name: someNumber
        type: { summary: number }
    examples:
      - name: string
      - name: number
        description: A numeric prop.
      - name: hidden
        parameters:
          docs: { disable: true }
  - path: Addon/Notes
    examples:
      - name: Simple note
        id: notes--simple
        parameters:
          notes: My notes on some button
";

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::from_yaml("  \n").unwrap();
        let (registry, _) = manifest.into_parts().unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_from_manifest() {
        let (registry, _) = Manifest::from_yaml(MANIFEST).unwrap().into_parts().unwrap();

        assert_eq!(registry.component_paths(), vec!["Docs/PropRow", "Addon/Notes"]);
        let ids: Vec<_> = registry
            .examples_for_path("Docs/PropRow")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["docs-proprow--string", "docs-proprow--number", "docs-proprow--hidden"]
        );

        let note = registry.example("notes--simple").unwrap();
        let params = note.parameters.as_ref().unwrap();
        assert_eq!(params.framework.as_deref(), Some("react"));
        assert_eq!(params.extra.get("notes"), Some(&Value::from("My notes on some button")));
    }

    #[test]
    fn test_page_from_manifest() {
        let (registry, hooks) = Manifest::from_yaml(MANIFEST).unwrap().into_parts().unwrap();
        let ctx = RenderContext::for_component(&registry, &hooks, "Docs/PropRow");

        let page = DocsPage::new().assemble(&ctx);

        assert_eq!(page.title, "PropRow");
        assert_eq!(page.subtitle, "One row of a props table");
        assert_eq!(page.description_markdown, "Renders a single **prop**.\n");
        assert_eq!(page.primary.unwrap().display_name, "string");
        assert_eq!(page.secondary.len(), 1);
        assert_eq!(page.secondary[0].story_description(), Some("A numeric prop."));

        let Some(PropertyTableSpec::Rows(rows)) = page.property_table else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].default_value, Some(PropSummary::new("fixme")));
        assert!(rows[0].required);
        assert!(!rows[1].required);
    }

    #[test]
    fn test_component_without_reference_has_no_description() {
        let (registry, hooks) = Manifest::from_yaml(MANIFEST).unwrap().into_parts().unwrap();
        let ctx = RenderContext::for_component(&registry, &hooks, "Addon/Notes");

        let page = DocsPage::new().assemble(&ctx);
        assert_eq!(page.title, "Notes");
        assert_eq!(page.description_markdown, "");
    }

    #[test]
    fn test_default_parameters_are_overridden() {
        let manifest = Manifest::from_yaml(MANIFEST)
            .unwrap()
            .with_default_parameters(serde_json::json!({
                "framework": "vue",
                "options": { "showRoots": true }
            }));
        let (registry, _) = manifest.into_parts().unwrap();

        let params = registry
            .example("notes--simple")
            .and_then(|e| e.parameters.as_ref())
            .unwrap();
        assert_eq!(params.framework.as_deref(), Some("react"));
        assert_eq!(params.options.as_ref().unwrap().show_roots, Some(true));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Manifest::from_yaml("components: [").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stories.yaml");
        std::fs::write(&path, MANIFEST).unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.components.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Manifest::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
