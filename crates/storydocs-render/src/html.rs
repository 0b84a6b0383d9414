//! HTML page renderer.

use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use storydocs_core::{
    ExampleRenderProps, PageDescription, PageRenderer, PropDef, PropertyTableSpec,
};

use crate::markdown::{escape_html, render_markdown};

/// Default location of the isolated example preview.
const DEFAULT_PREVIEW_URL: &str = "iframe.html";

/// Characters kept as-is in the preview `id` query value (RFC 3986 unreserved).
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Shown when a component declares no properties.
const NO_PROPS_MESSAGE: &str = "No props found for this component.";

/// Renders a page as an HTML fragment.
///
/// Layout, in order: `<h1>` title, subtitle, description, primary example,
/// property table, then a `Stories` section holding the secondary examples.
/// Empty regions produce no markup.
///
/// Each example is wrapped in `<div id="anchor--{id}">` so pages can link to
/// it. Expanded examples get an `<h3>` heading and their story description;
/// the preview toolbar only appears when `show_toolbar` is set.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    preview_url: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            preview_url: DEFAULT_PREVIEW_URL.to_owned(),
        }
    }
}

impl HtmlRenderer {
    /// Create a renderer with the default preview URL.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL example previews are loaded from.
    ///
    /// The example id is appended as the `id` query parameter.
    #[must_use]
    pub fn with_preview_url(mut self, url: impl Into<String>) -> Self {
        self.preview_url = url.into();
        self
    }

    /// Render a page as a standalone HTML document.
    #[must_use]
    pub fn render_document(&self, page: &PageDescription) -> String {
        let body = self.render(page);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
            escape_html(&page.title)
        )
    }

    fn example(&self, example: &ExampleRenderProps, out: &mut String) {
        let id = escape_html(&example.id);
        let name = escape_html(&example.display_name);
        write!(out, r#"<div id="anchor--{id}" class="docs-story">"#).unwrap();

        if example.expanded {
            write!(out, "<h3>{name}</h3>").unwrap();
            if let Some(description) = example.story_description() {
                out.push_str(r#"<div class="docs-story-description">"#);
                out.push_str(&render_markdown(description));
                out.push_str("</div>");
            }
        }

        let src = escape_html(&format!(
            "{}?id={}&viewMode=story",
            self.preview_url,
            utf8_percent_encode(&example.id, QUERY_VALUE_ENCODE_SET)
        ));
        out.push_str(r#"<div class="docs-preview">"#);
        if example.show_toolbar {
            write!(
                out,
                r#"<div class="docs-preview-toolbar"><a href="{src}" target="_blank">Open canvas</a></div>"#
            )
            .unwrap();
        }
        write!(
            out,
            r#"<iframe src="{src}" title="{name}" loading="lazy"></iframe></div></div>"#
        )
        .unwrap();
    }
}

impl PageRenderer for HtmlRenderer {
    type Output = String;

    fn render(&self, page: &PageDescription) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(r#"<article class="docs-page">"#);

        if !page.title.is_empty() {
            write!(out, "<h1>{}</h1>", escape_html(&page.title)).unwrap();
        }
        if !page.subtitle.is_empty() {
            write!(
                out,
                r#"<p class="docs-subtitle">{}</p>"#,
                escape_html(&page.subtitle)
            )
            .unwrap();
        }
        if !page.description_markdown.is_empty() {
            out.push_str(r#"<div class="docs-description">"#);
            out.push_str(&render_markdown(&page.description_markdown));
            out.push_str("</div>");
        }
        if let Some(primary) = &page.primary {
            self.example(primary, &mut out);
        }
        if let Some(table) = &page.property_table {
            property_table(table, &mut out);
        }
        if !page.secondary.is_empty() {
            out.push_str("<h2>Stories</h2>");
            for example in &page.secondary {
                self.example(example, &mut out);
            }
        }

        out.push_str("</article>\n");
        out
    }
}

fn property_table(table: &PropertyTableSpec, out: &mut String) {
    let rows = match table {
        PropertyTableSpec::Error(error) => {
            write!(
                out,
                r#"<div class="docs-props-message">{}</div>"#,
                escape_html(error.message())
            )
            .unwrap();
            return;
        }
        PropertyTableSpec::Rows(rows) if rows.is_empty() => {
            write!(out, r#"<div class="docs-props-message">{NO_PROPS_MESSAGE}</div>"#).unwrap();
            return;
        }
        PropertyTableSpec::Rows(rows) => rows,
    };

    out.push_str(
        r#"<table class="docs-props"><thead><tr><th>Name</th><th>Description</th><th>Default</th></tr></thead><tbody>"#,
    );
    for row in rows {
        property_row(row, out);
    }
    out.push_str("</tbody></table>");
}

fn property_row(row: &PropDef, out: &mut String) {
    write!(out, "<tr><td>{}", escape_html(&row.name)).unwrap();
    if row.required {
        out.push_str(r#"<span class="docs-prop-required">*</span>"#);
    }
    out.push_str("</td><td>");
    if !row.description.is_empty() {
        out.push_str(&render_markdown(&row.description));
    }
    if let Some(type_info) = &row.type_info {
        write!(
            out,
            r#"<code class="docs-prop-type">{}</code>"#,
            escape_html(&type_info.summary)
        )
        .unwrap();
    }
    out.push_str("</td><td>");
    match &row.default_value {
        Some(default) => write!(out, "<code>{}</code>", escape_html(&default.summary)).unwrap(),
        None => out.push('-'),
    }
    out.push_str("</td></tr>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use storydocs_core::{DocsParameters, Parameters, PropSummary, PropsTableError};

    use super::*;

    fn example(id: &str, expanded: bool, show_toolbar: bool) -> ExampleRenderProps {
        ExampleRenderProps {
            id: id.to_owned(),
            display_name: id.to_owned(),
            expanded,
            show_toolbar,
            parameters: None,
        }
    }

    fn page() -> PageDescription {
        PageDescription {
            title: "Button".to_owned(),
            subtitle: String::new(),
            description_markdown: String::new(),
            primary: None,
            property_table: None,
            secondary: Vec::new(),
        }
    }

    #[test]
    fn test_title_only() {
        let html = HtmlRenderer::new().render(&page());
        assert_eq!(html, "<article class=\"docs-page\"><h1>Button</h1></article>\n");
    }

    #[test]
    fn test_render_document() {
        let html = HtmlRenderer::new().render_document(&page());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("<title>Button</title>"));
        assert!(html.contains("<body>\n<article class=\"docs-page\"><h1>Button</h1></article>\n</body>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let page = PageDescription {
            title: "<Button>".to_owned(),
            subtitle: "A & B".to_owned(),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);
        assert!(html.contains("<h1>&lt;Button&gt;</h1>"));
        assert!(html.contains(r#"<p class="docs-subtitle">A &amp; B</p>"#));
    }

    #[test]
    fn test_description_markdown() {
        let page = PageDescription {
            description_markdown: "Uses **bold**.".to_owned(),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);
        assert!(html.contains(
            r#"<div class="docs-description"><p>Uses <strong>bold</strong>.</p>
</div>"#
        ));
    }

    #[test]
    fn test_primary_collapsed_with_toolbar() {
        let page = PageDescription {
            primary: Some(example("button--one", false, true)),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains(r#"<div id="anchor--button--one" class="docs-story">"#));
        assert!(html.contains("docs-preview-toolbar"));
        assert!(html.contains(r#"src="iframe.html?id=button--one&amp;viewMode=story""#));
        assert!(!html.contains("<h3>"));
        assert!(!html.contains("<h2>Stories</h2>"));
    }

    #[test]
    fn test_secondary_expanded_without_toolbar() {
        let params = Parameters {
            docs: Some(DocsParameters {
                story_description: Some("Second *one*.".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mut second = example("button--two", true, false);
        second.parameters = Some(params);
        let page = PageDescription {
            primary: Some(example("button--one", false, true)),
            secondary: vec![second, example("button--three", true, false)],
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains("<h2>Stories</h2>"));
        assert!(html.contains("<h3>button--two</h3>"));
        assert!(html.contains("<h3>button--three</h3>"));
        assert!(html.contains("<p>Second <em>one</em>.</p>"));
        assert_eq!(html.matches("docs-preview-toolbar").count(), 1);
        assert!(html.find("anchor--button--one") < html.find("<h2>Stories</h2>"));
    }

    #[test]
    fn test_preview_id_is_percent_encoded() {
        let page = PageDescription {
            primary: Some(example("a&b #1", false, true)),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);
        assert!(html.contains(r#"src="iframe.html?id=a%26b%20%231&amp;viewMode=story""#));
        assert!(html.contains(r#"href="iframe.html?id=a%26b%20%231&amp;viewMode=story""#));
        assert!(html.contains(r#"<div id="anchor--a&amp;b #1" class="docs-story">"#));
    }

    #[test]
    fn test_custom_preview_url() {
        let page = PageDescription {
            primary: Some(example("x--y", false, false)),
            ..page()
        };
        let html = HtmlRenderer::new()
            .with_preview_url("https://preview.example.com/frame")
            .render(&page);
        assert!(html.contains(r#"src="https://preview.example.com/frame?id=x--y&amp;viewMode=story""#));
    }

    #[test]
    fn test_props_rows() {
        let page = PageDescription {
            property_table: Some(PropertyTableSpec::Rows(vec![
                PropDef {
                    name: "label".to_owned(),
                    type_info: Some(PropSummary::new("string")),
                    required: true,
                    description: "Button text".to_owned(),
                    default_value: None,
                },
                PropDef {
                    name: "size".to_owned(),
                    default_value: Some(PropSummary::new("'md'")),
                    ..Default::default()
                },
            ])),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);

        assert!(html.contains(r#"<table class="docs-props">"#));
        assert!(html.contains(
            r#"<tr><td>label<span class="docs-prop-required">*</span></td><td><p>Button text</p>
<code class="docs-prop-type">string</code></td><td>-</td></tr>"#
        ));
        assert!(html.contains("<tr><td>size</td><td></td><td><code>&#x27;md&#x27;</code></td></tr>"));
    }

    #[test]
    fn test_props_error_message() {
        let page = PageDescription {
            property_table: Some(PropertyTableSpec::Error(PropsTableError::NoComponent)),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);
        assert!(html.contains(r#"<div class="docs-props-message">No component found</div>"#));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_props_empty_rows() {
        let page = PageDescription {
            property_table: Some(PropertyTableSpec::Rows(Vec::new())),
            ..page()
        };
        let html = HtmlRenderer::new().render(&page);
        assert!(html.contains(NO_PROPS_MESSAGE));
    }
}
