use reqwest::StatusCode;

/// Error type returned by `wtf` public APIs.
#[derive(Debug, thiserror::Error)]
pub enum WtfError {
    #[error("Failed to create HTTP client: {0}")]
    CreateHttpClient(#[source] reqwest::Error),

    #[error("Failed to build request URL: {0}")]
    BuildRequestUrl(#[source] url::ParseError),

    #[error("Failed to fetch document: {0}")]
    FetchDocument(#[source] reqwest::Error),

    #[error("Request failed with status: {0}")]
    HttpStatus(StatusCode),

    #[error("Failed to read response: {0}")]
    ReadResponse(#[source] reqwest::Error),

    #[error("Unsupported document charset: {0}")]
    UnsupportedCharset(String),

    #[error("Failed to parse CSS selector: {0}")]
    ParseCssSelector(&'static str),

    #[error("At least one word is required")]
    EmptyQuery,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    #[error("Line {line} is too long to scan")]
    LineTooLong { line: usize },
}
