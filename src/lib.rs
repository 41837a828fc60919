//! `wtf` library API.
//!
//! Look words up in the Youdao web dictionary and render the result page as
//! a plain text report.

mod engine;
mod error;
mod extract;
mod lines;
mod query;
mod report;
mod selector;
mod source;

pub use engine::Engine;
pub use error::WtfError;
pub use extract::{
    extract_definitions, extract_pronunciations, extract_senses, extract_web_phrases,
    extract_web_translations, extract_word_groups, parse_report_from_html,
};
pub use lines::{normalized_lines, physical_lines, scanned_lines, LineScanner, MAX_LINE_BYTES};
pub use query::{Language, Query};
pub use report::{Pronounce, Report};
pub use source::{DocumentSource, HttpSource, SourceConfig};

/// Run `query` over HTTP with the engine it selects.
///
/// # Errors
///
/// Returns [`WtfError`] when the HTTP client cannot be built, the request
/// fails or returns a non-success status, the body cannot be decoded, or URL
/// building fails.
pub fn lookup(query: &Query, config: &SourceConfig) -> Result<Report, WtfError> {
    let source = HttpSource::new(config)?;
    query.engine().execute(query, &source)
}
