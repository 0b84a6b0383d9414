//! Slot resolvers.
//!
//! Each slot derives one region of a documentation page from the render
//! context. The `default_*` functions are the resolvers used when a page
//! does not override a slot; they never fail and return `None` when the
//! region has nothing to show.

use crate::context::RenderContext;
use crate::example::{Example, ExampleRenderProps};
use crate::hierarchy::parse_kind;
use crate::props::{PropertyTableSpec, PropsTarget, property_table_for};

/// Resolver for a text region (title, subtitle, description).
pub type StringSlot = Box<dyn Fn(&RenderContext<'_>) -> Option<String> + Send + Sync>;

/// Resolver for the property-table region.
pub type PropsSlot = Box<dyn Fn(&RenderContext<'_>) -> Option<PropertyTableSpec> + Send + Sync>;

/// Resolver for the primary example.
pub type ExampleSlot =
    Box<dyn Fn(&[&Example], &RenderContext<'_>) -> Option<ExampleRenderProps> + Send + Sync>;

/// Resolver for the secondary examples.
pub type ExamplesSlot =
    Box<dyn Fn(&[&Example], &RenderContext<'_>) -> Option<Vec<ExampleRenderProps>> + Send + Sync>;

/// Short display title derived from the component path.
///
/// With `options.showRoots` set either way the path is split on `/` only.
/// Otherwise it is parsed with the configured (or default) root and group
/// separators. The last segment wins; the full path is the fallback.
pub fn default_title(ctx: &RenderContext<'_>) -> Option<String> {
    let path = ctx.component_path;
    let options = ctx.parameters.and_then(|p| p.options.clone()).unwrap_or_default();

    let last = if options.show_roots.is_some() {
        path.split('/').next_back().map(str::to_owned)
    } else {
        parse_kind(path, options.root_separator(), &options.group_separator())
            .groups
            .pop()
    };

    Some(
        last.filter(|segment| !segment.is_empty())
            .unwrap_or_else(|| path.to_owned()),
    )
}

/// `componentSubtitle` parameter, verbatim.
pub fn default_subtitle(ctx: &RenderContext<'_>) -> Option<String> {
    ctx.parameters.and_then(|p| p.component_subtitle.clone())
}

/// Component description from the configured extractor.
///
/// `None` without a `component` parameter, regardless of the extractor.
pub fn default_description(ctx: &RenderContext<'_>) -> Option<String> {
    let parameters = ctx.parameters?;
    let component = parameters.component.as_ref()?;
    let extractor = ctx.hooks.description_extractor.as_ref()?;
    extractor.extract(component, parameters)
}

/// Property table of the current component.
pub fn default_property_table(ctx: &RenderContext<'_>) -> Option<PropertyTableSpec> {
    Some(property_table_for(&PropsTarget::CurrentComponent, &[], ctx))
}

/// First example, if any.
pub fn default_primary(
    examples: &[&Example],
    _ctx: &RenderContext<'_>,
) -> Option<ExampleRenderProps> {
    examples.first().map(|example| ExampleRenderProps::from(*example))
}

/// Every example after the first, when there is more than one.
pub fn default_secondary(
    examples: &[&Example],
    _ctx: &RenderContext<'_>,
) -> Option<Vec<ExampleRenderProps>> {
    match examples {
        [_, rest @ ..] if !rest.is_empty() => Some(
            rest.iter()
                .map(|example| ExampleRenderProps::from(*example))
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::context::DocsHooks;
    use crate::parameters::{ComponentRef, Parameters};
    use crate::registry::InMemoryRegistry;

    fn params(value: serde_json::Value) -> Parameters {
        Parameters::from_value(value).unwrap()
    }

    fn title(path: &str, parameters: Option<&Parameters>) -> Option<String> {
        let registry = InMemoryRegistry::new();
        let hooks = DocsHooks::new();
        let ctx = RenderContext::new(path, "", parameters, &registry, &hooks);
        default_title(&ctx)
    }

    #[test]
    fn test_title_default_separators() {
        assert_eq!(title("A/B/C", None).as_deref(), Some("C"));
        assert_eq!(title("A.B", None).as_deref(), Some("B"));
        assert_eq!(title("Root|A/B", None).as_deref(), Some("B"));
    }

    #[test]
    fn test_title_show_roots_splits_on_slash_only() {
        let show = params(json!({ "options": { "showRoots": true } }));
        assert_eq!(title("A/B/C", Some(&show)).as_deref(), Some("C"));
        assert_eq!(title("A.B", Some(&show)).as_deref(), Some("A.B"));
    }

    #[test]
    fn test_title_show_roots_false_also_strict() {
        let hide = params(json!({ "options": { "showRoots": false } }));
        assert_eq!(title("A.B", Some(&hide)).as_deref(), Some("A.B"));
        assert_eq!(title("Root|A/B", Some(&hide)).as_deref(), Some("B"));
    }

    #[test]
    fn test_title_custom_separators() {
        let custom = params(json!({
            "options": { "hierarchyRootSeparator": "::", "hierarchySeparator": "-" }
        }));
        assert_eq!(title("Kit::Forms-Input", Some(&custom)).as_deref(), Some("Input"));
        assert_eq!(title("A/B", Some(&custom)).as_deref(), Some("A/B"));
    }

    #[test]
    fn test_title_stops_at_second_root_separator() {
        assert_eq!(title("Root|A/B|C", None).as_deref(), Some("B"));
    }

    #[test]
    fn test_title_falls_back_to_path() {
        let show = params(json!({ "options": { "showRoots": true } }));
        assert_eq!(title("A/", Some(&show)).as_deref(), Some("A/"));
        assert_eq!(title("///", None).as_deref(), Some("///"));
    }

    #[test]
    fn test_title_empty_path() {
        assert_eq!(title("", None).as_deref(), Some(""));
    }

    #[test]
    fn test_subtitle() {
        let registry = InMemoryRegistry::new();
        let hooks = DocsHooks::new();
        let with = params(json!({ "componentSubtitle": "Clickable things" }));

        let ctx = RenderContext::new("A", "", Some(&with), &registry, &hooks);
        assert_eq!(default_subtitle(&ctx).as_deref(), Some("Clickable things"));

        let ctx = RenderContext::new("A", "", None, &registry, &hooks);
        assert_eq!(default_subtitle(&ctx), None);
    }

    #[test]
    fn test_description_requires_component() {
        let registry = InMemoryRegistry::new();
        let hooks = DocsHooks::new().with_description_extractor(
            |component: &ComponentRef, _: &Parameters| Some(format!("{component} docs")),
        );

        let without = params(json!({ "componentSubtitle": "x" }));
        let ctx = RenderContext::new("A", "", Some(&without), &registry, &hooks);
        assert_eq!(default_description(&ctx), None);

        let ctx = RenderContext::new("A", "", None, &registry, &hooks);
        assert_eq!(default_description(&ctx), None);

        let with = params(json!({ "component": "Button" }));
        let ctx = RenderContext::new("A", "", Some(&with), &registry, &hooks);
        assert_eq!(default_description(&ctx).as_deref(), Some("Button docs"));
    }

    #[test]
    fn test_description_without_extractor() {
        let registry = InMemoryRegistry::new();
        let hooks = DocsHooks::new();
        let with = params(json!({ "component": "Button" }));
        let ctx = RenderContext::new("A", "", Some(&with), &registry, &hooks);
        assert_eq!(default_description(&ctx), None);
    }

    #[test]
    fn test_primary_and_secondary_selection() {
        let registry = InMemoryRegistry::new();
        let hooks = DocsHooks::new();
        let ctx = RenderContext::new("A", "", None, &registry, &hooks);

        let e1 = Example::new("a--1", "A", "One");
        let e2 = Example::new("a--2", "A", "Two");
        let e3 = Example::new("a--3", "A", "Three");

        assert_eq!(default_primary(&[], &ctx), None);
        assert_eq!(default_secondary(&[], &ctx), None);

        assert_eq!(default_primary(&[&e1], &ctx).unwrap().id, "a--1");
        assert_eq!(default_secondary(&[&e1], &ctx), None);

        let secondary = default_secondary(&[&e1, &e2, &e3], &ctx).unwrap();
        let ids: Vec<_> = secondary.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a--2", "a--3"]);
        assert!(secondary.iter().all(|s| s.expanded && !s.show_toolbar));
    }
}
