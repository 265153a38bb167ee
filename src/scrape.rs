//! A thin view over a parsed HTML page.
//!
//! Only the three capabilities the scrapers need are exposed: select by CSS
//! selector, read trimmed text, and read the class attribute. Everything
//! else about the markup stays inside `scraper`.

use crate::error::{ProbeError, Result};
use scraper::{ElementRef, Html, Selector};

pub struct Page {
    doc: Html,
}

impl Page {
    /// The parser recovers from any malformed markup, so this cannot fail.
    pub fn parse(body: &str) -> Self {
        Self {
            doc: Html::parse_document(body),
        }
    }

    pub fn select_first(&self, selector: &str) -> Result<Option<ElementRef<'_>>> {
        let selector = selector_for(selector)?;
        Ok(self.doc.select(&selector).next())
    }

    pub fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = selector_for(selector)?;
        Ok(self.doc.select(&selector).collect())
    }
}

pub fn selector_for(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ProbeError::Selector(format!("{selector}: {e}")))
}

/// Concatenated text of the element and its descendants, untrimmed.
pub fn text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn trimmed_text(el: &ElementRef<'_>) -> String {
    text(el).trim().to_string()
}

/// The raw `class` attribute, empty when absent.
pub fn class_list<'a>(el: &ElementRef<'a>) -> &'a str {
    el.value().attr("class").unwrap_or("")
}

/// First descendant of `el`'s parent element matching `selector`.
pub fn find_in_parent<'a>(el: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    let parent = el.parent().and_then(ElementRef::wrap)?;
    parent.select(selector).next()
}
