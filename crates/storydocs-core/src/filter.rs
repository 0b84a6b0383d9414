//! Example selection for a documentation page.

use crate::context::RenderContext;
use crate::example::Example;

/// Examples of the current component path that are not `docs.disable`d.
///
/// Registry order is preserved.
pub fn documented_examples<'a>(ctx: &RenderContext<'a>) -> Vec<&'a Example> {
    let registry = ctx.registry;
    registry
        .examples_for_path(ctx.component_path)
        .into_iter()
        .filter(|example| !example.docs_disabled())
        .collect()
}
