//! Property tables.
//!
//! A property table lists the configurable properties of a component. Rows
//! come from a [`PropDefsExtractor`](crate::PropDefsExtractor) supplied
//! through [`DocsHooks`](crate::DocsHooks).

use serde::{Deserialize, Serialize};

use crate::context::RenderContext;
use crate::parameters::{ComponentRef, Parameters};

/// One property row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDef {
    /// Property name.
    pub name: String,
    /// Type summary.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_info: Option<PropSummary>,
    /// Whether the property must be set.
    #[serde(default)]
    pub required: bool,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Default value summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<PropSummary>,
}

/// Short text with optional expanded detail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropSummary {
    /// Summary shown inline.
    pub summary: String,
    /// Longer form shown on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl PropSummary {
    /// Summary without detail.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: None,
        }
    }
}

/// Why a property table could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropsTableError {
    /// Neither the parameters nor the request name a component.
    NoComponent,
    /// No property extractor is configured.
    PropsUnsupported,
}

impl PropsTableError {
    /// Message shown in place of the table.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NoComponent => "No component found",
            Self::PropsUnsupported => {
                "Props unsupported. See Props documentation for your framework."
            }
        }
    }
}

/// Content of the property-table region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyTableSpec {
    /// Table rows.
    Rows(Vec<PropDef>),
    /// Error shown instead of rows.
    Error(PropsTableError),
}

/// Which component a property table describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropsTarget {
    /// The `component` parameter of the current context.
    CurrentComponent,
    /// A specific component.
    Component(ComponentRef),
}

/// Build the property table for `target`.
///
/// Rows whose name is listed in `exclude` are dropped.
#[must_use]
pub fn property_table_for(
    target: &PropsTarget,
    exclude: &[&str],
    ctx: &RenderContext<'_>,
) -> PropertyTableSpec {
    let component = match target {
        PropsTarget::Component(component) => Some(component),
        PropsTarget::CurrentComponent => ctx.parameters.and_then(|p| p.component.as_ref()),
    };
    let Some(component) = component else {
        return PropertyTableSpec::Error(PropsTableError::NoComponent);
    };
    let Some(extractor) = ctx.hooks.prop_defs.as_ref() else {
        return PropertyTableSpec::Error(PropsTableError::PropsUnsupported);
    };

    let fallback = Parameters::default();
    let parameters = ctx.parameters.unwrap_or(&fallback);

    let rows = extractor
        .prop_defs(component, parameters)
        .into_iter()
        .filter(|row| !exclude.contains(&row.name.as_str()))
        .collect();
    PropertyTableSpec::Rows(rows)
}
