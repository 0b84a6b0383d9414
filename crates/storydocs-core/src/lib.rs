//! Slot composition engine for component documentation pages.
//!
//! A documentation page for a UI component is assembled from its registered
//! usage examples and declared metadata. Each region of the page is produced
//! by an independent slot resolver:
//!
//! | slot             | default                                          |
//! |------------------|--------------------------------------------------|
//! | title            | last segment of the component path               |
//! | subtitle         | `componentSubtitle` parameter                    |
//! | description      | [`DescriptionExtractor`] for the `component`     |
//! | property table   | [`PropDefsExtractor`] for the `component`        |
//! | primary          | first documented example                         |
//! | secondary        | every documented example after the first         |
//!
//! [`DocsPage`] holds the resolver table and folds the results into a
//! [`PageDescription`]. Resolvers are pure functions of a [`RenderContext`],
//! which borrows the [`ExampleRegistry`], the selection and its combined
//! [`Parameters`] for one render pass.
//!
//! Examples flagged with `docs.disable` never reach the primary or
//! secondary resolvers.

mod context;
mod example;
mod filter;
mod hierarchy;
mod manifest;
mod page;
mod parameters;
mod props;
mod registry;
pub mod slots;

pub use context::{DescriptionExtractor, DocsHooks, PropDefsExtractor, RenderContext};
pub use example::{Example, ExampleRenderProps};
pub use filter::documented_examples;
pub use hierarchy::{ParsedKind, parse_kind};
pub use manifest::{ComponentManifest, ExampleManifest, Manifest, ManifestError};
pub use page::{DocsPage, DocsPageBuilder, PageDescription, PageRenderer};
pub use parameters::{
    ComponentRef, DEFAULT_GROUP_PATTERN, DEFAULT_ROOT_SEPARATOR, DocsParameters, HierarchyOptions,
    Parameters, Separator,
};
pub use props::{
    PropDef, PropSummary, PropertyTableSpec, PropsTableError, PropsTarget, property_table_for,
};
pub use registry::{
    ExampleRegistry, InMemoryRegistry, RegistryError, component_id, example_id, merge_parameters,
};
