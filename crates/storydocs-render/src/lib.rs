//! Output formats for assembled documentation pages.
//!
//! Both renderers implement [`PageRenderer`](storydocs_core::PageRenderer):
//!
//! - [`HtmlRenderer`] produces an HTML fragment per page, rendering
//!   description markdown with GitHub Flavored Markdown extensions.
//! - [`JsonRenderer`] serializes the [`PageDescription`](storydocs_core::PageDescription)
//!   itself for consumers that render pages on their own.

mod html;
mod json;
mod markdown;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::{escape_html, render_markdown};
