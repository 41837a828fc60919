//! Cached CSS selectors and option-typed lookups over a parsed document.

use scraper::{ElementRef, Selector};
use std::sync::OnceLock;

use crate::WtfError;

type CachedSelector = OnceLock<Result<Selector, WtfError>>;

pub(crate) static PRONOUNCE_CONTAINER: CachedSelector = OnceLock::new();
pub(crate) static PRONOUNCE: CachedSelector = OnceLock::new();
pub(crate) static DEFINITION_ITEM: CachedSelector = OnceLock::new();
pub(crate) static WORD_GROUP: CachedSelector = OnceLock::new();
pub(crate) static SPAN: CachedSelector = OnceLock::new();
pub(crate) static CONTENT_TITLE: CachedSelector = OnceLock::new();
pub(crate) static LINK: CachedSelector = OnceLock::new();
pub(crate) static SENSE_CONTAINER: CachedSelector = OnceLock::new();
pub(crate) static ORDERED_SENSE: CachedSelector = OnceLock::new();
pub(crate) static UNORDERED_SENSE: CachedSelector = OnceLock::new();
pub(crate) static SENSE_TITLE: CachedSelector = OnceLock::new();
pub(crate) static SENSE_EXAMPLE: CachedSelector = OnceLock::new();
pub(crate) static PARAGRAPH: CachedSelector = OnceLock::new();
pub(crate) static EXAMPLE_SENTENCE: CachedSelector = OnceLock::new();
pub(crate) static WEB_TRANS_CONTAINER: CachedSelector = OnceLock::new();
pub(crate) static WEB_TRANS_TITLE: CachedSelector = OnceLock::new();
pub(crate) static COLLAPSE_CONTENT: CachedSelector = OnceLock::new();
pub(crate) static WEB_PHRASE_GROUP: CachedSelector = OnceLock::new();
pub(crate) static META_CHARSET: CachedSelector = OnceLock::new();
pub(crate) static META_HTTP_EQUIV: CachedSelector = OnceLock::new();

pub(crate) fn cached_selector(
    cache: &'static CachedSelector,
    css: &'static str,
) -> Result<&'static Selector, WtfError> {
    match cache.get_or_init(|| Selector::parse(css).map_err(|_| WtfError::ParseCssSelector(css))) {
        Ok(selector) => Ok(selector),
        Err(_) => Err(WtfError::ParseCssSelector(css)),
    }
}

/// First descendant of `scope` matching `selector`.
pub(crate) fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

/// Text content of `element` with surrounding whitespace removed.
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
