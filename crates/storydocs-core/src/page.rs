//! Documentation page assembly.
//!
//! [`DocsPage`] owns one resolver per slot. Every slot starts with its
//! default from [`crate::slots`]; [`DocsPageBuilder`] replaces any subset.
//! [`DocsPage::assemble`] runs each resolver exactly once against a
//! [`RenderContext`] and folds the results into a [`PageDescription`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use storydocs_core::{DocsHooks, DocsPage, InMemoryRegistry, RenderContext};
//!
//! let mut registry = InMemoryRegistry::new();
//! registry.add_example("Forms/Button", "Primary", None, json!(null)).unwrap();
//! registry.add_example("Forms/Button", "Secondary", None, json!(null)).unwrap();
//! let hooks = DocsHooks::new();
//!
//! let page = DocsPage::builder()
//!     .subtitle(|_| Some("Clickable".to_owned()))
//!     .build();
//! let ctx = RenderContext::for_component(&registry, &hooks, "Forms/Button");
//! let description = page.assemble(&ctx);
//!
//! assert_eq!(description.title, "Button");
//! assert_eq!(description.subtitle, "Clickable");
//! assert_eq!(description.secondary.len(), 1);
//! ```

use std::fmt;

use serde::Serialize;

use crate::context::RenderContext;
use crate::example::{Example, ExampleRenderProps};
use crate::filter::documented_examples;
use crate::props::PropertyTableSpec;
use crate::slots::{
    ExampleSlot, ExamplesSlot, PropsSlot, StringSlot, default_description, default_primary,
    default_property_table, default_secondary, default_subtitle, default_title,
};

/// Assembled documentation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescription {
    /// Page title (empty when the resolver returned nothing).
    pub title: String,
    /// Subtitle (may be empty).
    pub subtitle: String,
    /// Component description markdown (may be empty).
    pub description_markdown: String,
    /// Primary example, collapsed with toolbar.
    pub primary: Option<ExampleRenderProps>,
    /// Property table region.
    pub property_table: Option<PropertyTableSpec>,
    /// Secondary examples, expanded. Empty hides the region.
    pub secondary: Vec<ExampleRenderProps>,
}

/// Consumer of assembled pages.
pub trait PageRenderer {
    /// Rendered form of a page.
    type Output;

    /// Render one page.
    fn render(&self, page: &PageDescription) -> Self::Output;
}

/// Documentation page with one resolver per slot.
pub struct DocsPage {
    title: StringSlot,
    subtitle: StringSlot,
    description: StringSlot,
    primary: ExampleSlot,
    property_table: PropsSlot,
    secondary: ExamplesSlot,
}

impl Default for DocsPage {
    fn default() -> Self {
        DocsPageBuilder::default().build()
    }
}

impl fmt::Debug for DocsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsPage").finish_non_exhaustive()
    }
}

impl DocsPage {
    /// Page using every default resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start overriding slots.
    #[must_use]
    pub fn builder() -> DocsPageBuilder {
        DocsPageBuilder::default()
    }

    /// Resolve every slot and assemble the page.
    ///
    /// Text slots that resolve to nothing become empty strings. Primary and
    /// secondary both receive the same filtered example list; primary is
    /// forced collapsed with its toolbar, secondaries are forced expanded.
    pub fn assemble(&self, ctx: &RenderContext<'_>) -> PageDescription {
        let title = (self.title)(ctx).unwrap_or_default();
        let subtitle = (self.subtitle)(ctx).unwrap_or_default();
        let description_markdown = (self.description)(ctx).unwrap_or_default();
        let property_table = (self.property_table)(ctx);

        let examples: Vec<&Example> = documented_examples(ctx);
        let primary = (self.primary)(&examples, ctx).map(|primary| ExampleRenderProps {
            expanded: false,
            show_toolbar: true,
            ..primary
        });
        let secondary: Vec<ExampleRenderProps> = (self.secondary)(&examples, ctx)
            .unwrap_or_default()
            .into_iter()
            .map(|example| ExampleRenderProps {
                expanded: true,
                ..example
            })
            .collect();

        tracing::debug!(
            component_path = ctx.component_path,
            selected = ctx.selected_example_id,
            examples = examples.len(),
            has_primary = primary.is_some(),
            secondary = secondary.len(),
            has_props = property_table.is_some(),
            "Assembled docs page"
        );

        PageDescription {
            title,
            subtitle,
            description_markdown,
            primary,
            property_table,
            secondary,
        }
    }

    /// Assemble the page and hand it to `renderer`.
    pub fn render<R: PageRenderer>(&self, ctx: &RenderContext<'_>, renderer: &R) -> R::Output {
        renderer.render(&self.assemble(ctx))
    }
}

/// Builder replacing individual slot resolvers.
///
/// Slots not set keep their default resolver.
pub struct DocsPageBuilder {
    page: DocsPage,
}

impl Default for DocsPageBuilder {
    fn default() -> Self {
        Self {
            page: DocsPage {
                title: Box::new(default_title),
                subtitle: Box::new(default_subtitle),
                description: Box::new(default_description),
                primary: Box::new(default_primary),
                property_table: Box::new(default_property_table),
                secondary: Box::new(default_secondary),
            },
        }
    }
}

impl fmt::Debug for DocsPageBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsPageBuilder").finish_non_exhaustive()
    }
}

impl DocsPageBuilder {
    /// Replace the title resolver.
    #[must_use]
    pub fn title<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.page.title = Box::new(resolver);
        self
    }

    /// Replace the subtitle resolver.
    #[must_use]
    pub fn subtitle<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.page.subtitle = Box::new(resolver);
        self
    }

    /// Replace the description resolver.
    #[must_use]
    pub fn description<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Option<String> + Send + Sync + 'static,
    {
        self.page.description = Box::new(resolver);
        self
    }

    /// Replace the primary example resolver.
    #[must_use]
    pub fn primary<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&[&Example], &RenderContext<'_>) -> Option<ExampleRenderProps>
            + Send
            + Sync
            + 'static,
    {
        self.page.primary = Box::new(resolver);
        self
    }

    /// Replace the property-table resolver.
    #[must_use]
    pub fn property_table<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&RenderContext<'_>) -> Option<PropertyTableSpec> + Send + Sync + 'static,
    {
        self.page.property_table = Box::new(resolver);
        self
    }

    /// Replace the secondary examples resolver.
    #[must_use]
    pub fn secondary<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&[&Example], &RenderContext<'_>) -> Option<Vec<ExampleRenderProps>>
            + Send
            + Sync
            + 'static,
    {
        self.page.secondary = Box::new(resolver);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> DocsPage {
        self.page
    }
}
