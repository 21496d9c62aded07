// Small read-only view over a fetched HTML page: Open Graph meta tags and
// script bodies addressed by element id.

use scraper::{Html, Selector};

pub struct PageDocument {
    document: Html,
}

impl PageDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// `content` of `<meta property="{property}">` (falls back to `name=`).
    /// Returns `None` when the tag is absent; an empty `content` is `Some("")`.
    pub fn meta_content(&self, property: &str) -> Option<String> {
        ["property", "name"].iter().find_map(|attr| {
            let selector = Selector::parse(&format!(r#"meta[{attr}="{property}"]"#)).ok()?;
            self.document
                .select(&selector)
                .next()
                .map(|el| el.value().attr("content").unwrap_or_default().to_string())
        })
    }

    /// Text content of `<script id="{id}">`.
    pub fn script_by_id(&self, id: &str) -> Option<String> {
        let selector = Selector::parse(&format!(r#"script[id="{id}"]"#)).ok()?;
        let element = self.document.select(&selector).next()?;
        Some(element.text().collect::<String>())
    }
}
