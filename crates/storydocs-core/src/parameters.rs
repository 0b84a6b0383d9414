//! Typed example parameters.
//!
//! Parameters are combined from three levels (global, component, example)
//! as JSON objects and then deserialized into [`Parameters`]. Keys the
//! engine does not recognize are kept in [`Parameters::extra`].
//!
//! Recognized keys (camelCase on the wire):
//! - `options.showRoots`
//! - `options.hierarchyRootSeparator`
//! - `options.hierarchySeparator`
//! - `componentSubtitle`
//! - `component`
//! - `docs.disable`
//! - `docs.storyDescription`
//! - `framework`

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default separator between the root and the rest of a component path.
pub const DEFAULT_ROOT_SEPARATOR: &str = "|";

/// Default group separator pattern: either `/` or `.`.
pub const DEFAULT_GROUP_PATTERN: &str = r"/|\.";

static DEFAULT_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_GROUP_PATTERN).unwrap());

/// Parameters attached to an example, after combination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    /// Hierarchy display options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<HierarchyOptions>,

    /// Subtitle shown under the page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_subtitle: Option<String>,

    /// Component the examples document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,

    /// Documentation page settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<DocsParameters>,

    /// UI framework name, passed through to property extraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Keys not interpreted by the engine.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Parameters {
    /// Deserialize parameters from a combined JSON value.
    ///
    /// `null` yields default parameters.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value)
    }

    /// Whether the example is excluded from documentation pages.
    #[must_use]
    pub fn docs_disabled(&self) -> bool {
        self.docs.as_ref().is_some_and(|docs| docs.disable)
    }

    /// Markdown description of a single example.
    #[must_use]
    pub fn story_description(&self) -> Option<&str> {
        self.docs
            .as_ref()
            .and_then(|docs| docs.story_description.as_deref())
    }
}

/// Opaque reference to the documented component.
///
/// The engine never looks inside it; extractors use it as a lookup key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(pub String);

impl ComponentRef {
    /// Create a component reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `docs` parameter block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsParameters {
    /// Exclude the example from documentation pages.
    #[serde(default)]
    pub disable: bool,

    /// Markdown shown under the example heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_description: Option<String>,
}

/// `options` parameter block controlling how component paths are displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyOptions {
    /// Explicit root grouping. When set (either way) only `/` separates groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_roots: Option<bool>,

    /// Separator between root and groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_root_separator: Option<String>,

    /// Separator between groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_separator: Option<Separator>,
}

impl HierarchyOptions {
    /// Configured root separator or `|`.
    #[must_use]
    pub fn root_separator(&self) -> &str {
        self.hierarchy_root_separator
            .as_deref()
            .unwrap_or(DEFAULT_ROOT_SEPARATOR)
    }

    /// Configured group separator or the `/`-or-`.` pattern.
    #[must_use]
    pub fn group_separator(&self) -> Separator {
        self.hierarchy_separator.clone().unwrap_or_default()
    }
}

/// Group separator: a literal string or a regular expression.
///
/// Deserializes from a plain string (literal) or `{ pattern = "..." }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Separator {
    /// Split on an exact substring.
    Literal(String),
    /// Split on every match of a regular expression.
    Pattern {
        /// Regular expression source.
        pattern: String,
    },
}

impl Default for Separator {
    fn default() -> Self {
        Self::Pattern {
            pattern: DEFAULT_GROUP_PATTERN.to_owned(),
        }
    }
}

impl Separator {
    /// Split `input` on this separator.
    ///
    /// An empty literal does not split. An invalid pattern falls back to
    /// splitting on its source text as a literal.
    pub fn split<'a>(&self, input: &'a str) -> Vec<&'a str> {
        match self {
            Self::Literal(sep) if sep.is_empty() => vec![input],
            Self::Literal(sep) => input.split(sep.as_str()).collect(),
            Self::Pattern { pattern } => match group_regex(pattern) {
                Ok(re) => re.split(input).collect(),
                Err(e) => {
                    tracing::warn!(
                        pattern = %pattern,
                        error = %e,
                        "Invalid hierarchy separator pattern"
                    );
                    Self::Literal(pattern.clone()).split(input)
                }
            },
        }
    }
}

/// Compiled group pattern; the default is compiled once.
fn group_regex(pattern: &str) -> Result<Cow<'static, Regex>, regex::Error> {
    if pattern == DEFAULT_GROUP_PATTERN {
        return Ok(Cow::Borrowed(&*DEFAULT_GROUP_RE));
    }
    Regex::new(pattern).map(Cow::Owned)
}
