//! Registered examples and their per-render display props.

use serde::Serialize;

use crate::parameters::Parameters;

/// A registered usage example of a component.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    /// Registry-unique identifier (e.g. `forms-button--primary`).
    pub id: String,
    /// Component path the example belongs to (e.g. `Forms/Button`).
    pub component_path: String,
    /// Human-readable example name.
    pub display_name: String,
    /// Combined parameters.
    pub parameters: Option<Parameters>,
}

impl Example {
    /// Create an example without parameters.
    pub fn new(
        id: impl Into<String>,
        component_path: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            component_path: component_path.into(),
            display_name: display_name.into(),
            parameters: None,
        }
    }

    /// Attach parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Whether `docs.disable` is set for this example.
    #[must_use]
    pub fn docs_disabled(&self) -> bool {
        self.parameters
            .as_ref()
            .is_some_and(Parameters::docs_disabled)
    }
}

/// Props for rendering one example block on a documentation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRenderProps {
    /// Example identifier.
    pub id: String,
    /// Heading text.
    pub display_name: String,
    /// Show the heading and per-example description.
    pub expanded: bool,
    /// Show the preview toolbar.
    pub show_toolbar: bool,
    /// Example parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,
}

impl ExampleRenderProps {
    /// Markdown description to show under the heading, if any.
    #[must_use]
    pub fn story_description(&self) -> Option<&str> {
        self.parameters
            .as_ref()
            .and_then(Parameters::story_description)
    }
}

impl From<&Example> for ExampleRenderProps {
    fn from(example: &Example) -> Self {
        Self {
            id: example.id.clone(),
            display_name: example.display_name.clone(),
            expanded: true,
            show_toolbar: false,
            parameters: example.parameters.clone(),
        }
    }
}
