//! JSON page renderer.

use storydocs_core::{PageDescription, PageRenderer};

/// Serializes pages as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    type Output = Result<String, serde_json::Error>;

    fn render(&self, page: &PageDescription) -> Self::Output {
        let mut json = serde_json::to_string_pretty(page)?;
        json.push('\n');
        Ok(json)
    }
}
