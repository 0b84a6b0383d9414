//! Render context and injected collaborators.

use std::fmt;
use std::sync::Arc;

use crate::example::Example;
use crate::parameters::{ComponentRef, Parameters};
use crate::props::PropDef;
use crate::registry::ExampleRegistry;

/// Extracts a markdown description for a component (e.g. from its source comments).
pub trait DescriptionExtractor: Send + Sync {
    /// Description of `component`, or `None` when it has none.
    fn extract(&self, component: &ComponentRef, parameters: &Parameters) -> Option<String>;
}

impl<F> DescriptionExtractor for F
where
    F: Fn(&ComponentRef, &Parameters) -> Option<String> + Send + Sync,
{
    fn extract(&self, component: &ComponentRef, parameters: &Parameters) -> Option<String> {
        self(component, parameters)
    }
}

/// Produces the property rows of a component.
pub trait PropDefsExtractor: Send + Sync {
    /// Property rows of `component`.
    fn prop_defs(&self, component: &ComponentRef, parameters: &Parameters) -> Vec<PropDef>;
}

impl<F> PropDefsExtractor for F
where
    F: Fn(&ComponentRef, &Parameters) -> Vec<PropDef> + Send + Sync,
{
    fn prop_defs(&self, component: &ComponentRef, parameters: &Parameters) -> Vec<PropDef> {
        self(component, parameters)
    }
}

/// Collaborators available to slot resolvers.
#[derive(Clone, Default)]
pub struct DocsHooks {
    /// Component description source.
    pub description_extractor: Option<Arc<dyn DescriptionExtractor>>,
    /// Property row source.
    pub prop_defs: Option<Arc<dyn PropDefsExtractor>>,
}

impl DocsHooks {
    /// Hooks with no collaborators configured.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the description extractor.
    #[must_use]
    pub fn with_description_extractor(
        mut self,
        extractor: impl DescriptionExtractor + 'static,
    ) -> Self {
        self.description_extractor = Some(Arc::new(extractor));
        self
    }

    /// Set the property row extractor.
    #[must_use]
    pub fn with_prop_defs(mut self, extractor: impl PropDefsExtractor + 'static) -> Self {
        self.prop_defs = Some(Arc::new(extractor));
        self
    }
}

impl fmt::Debug for DocsHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsHooks")
            .field("description_extractor", &self.description_extractor.is_some())
            .field("prop_defs", &self.prop_defs.is_some())
            .finish()
    }
}

/// Snapshot of everything a render pass reads.
///
/// Borrowed for the duration of one pass; build a new one whenever the
/// selection or parameters change.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Component path of the page being rendered.
    pub component_path: &'a str,
    /// Currently selected example id.
    pub selected_example_id: &'a str,
    /// Combined parameters of the selection.
    pub parameters: Option<&'a Parameters>,
    /// Example source.
    pub registry: &'a dyn ExampleRegistry,
    /// Injected collaborators.
    pub hooks: &'a DocsHooks,
}

impl<'a> RenderContext<'a> {
    /// Create a context from its parts.
    #[must_use]
    pub fn new(
        component_path: &'a str,
        selected_example_id: &'a str,
        parameters: Option<&'a Parameters>,
        registry: &'a dyn ExampleRegistry,
        hooks: &'a DocsHooks,
    ) -> Self {
        Self {
            component_path,
            selected_example_id,
            parameters,
            registry,
            hooks,
        }
    }

    /// Context for a selected example, using its combined parameters.
    ///
    /// Returns `None` when the id is not registered.
    #[must_use]
    pub fn for_example(
        registry: &'a dyn ExampleRegistry,
        hooks: &'a DocsHooks,
        example_id: &str,
    ) -> Option<Self> {
        let example: &'a Example = registry.example(example_id)?;
        Some(Self::new(
            &example.component_path,
            &example.id,
            example.parameters.as_ref(),
            registry,
            hooks,
        ))
    }

    /// Context for a component page with no explicit selection.
    ///
    /// Selects the first registered example of the path. Without examples
    /// the component-level parameters are used and the selection is empty.
    #[must_use]
    pub fn for_component(
        registry: &'a dyn ExampleRegistry,
        hooks: &'a DocsHooks,
        component_path: &'a str,
    ) -> Self {
        match registry.examples_for_path(component_path).first().copied() {
            Some(example) => Self::new(
                component_path,
                &example.id,
                example.parameters.as_ref(),
                registry,
                hooks,
            ),
            None => Self::new(
                component_path,
                "",
                registry.component_parameters(component_path),
                registry,
                hooks,
            ),
        }
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("component_path", &self.component_path)
            .field("selected_example_id", &self.selected_example_id)
            .field("parameters", &self.parameters)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}
