//! Fetching result pages and decoding them to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};

use crate::selector::{cached_selector, META_CHARSET, META_HTTP_EQUIV};
use crate::WtfError;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";
const SNIFF_BYTES: usize = 1024;

/// Something that turns a URL into decoded page text.
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> Result<String, WtfError>;
}

/// HTTP client settings.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub user_agent: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            user_agent: BROWSER_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(10)),
        }
    }
}

/// [`DocumentSource`] backed by a blocking reqwest client.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, WtfError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(WtfError::CreateHttpClient)?;
        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String, WtfError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(WtfError::FetchDocument)?;
        let response = ensure_success_response(response)?;
        let charset = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(charset_from_content_type);
        let body = response.bytes().map_err(WtfError::ReadResponse)?;
        debug!(bytes = body.len(), charset = ?charset, "fetched document");
        decode_body(&body, charset.as_deref())
    }
}

fn ensure_success_response(response: Response) -> Result<Response, WtfError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(WtfError::HttpStatus(status))
    }
}

/// Charset parameter of a Content-Type header value, if any.
fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .map(str::trim)
        .find_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches('"').to_string())
        })
        .filter(|charset| !charset.is_empty())
}

/// Charset declared by a `<meta>` tag near the start of the page.
fn sniff_meta_charset(body: &[u8]) -> Result<Option<String>, WtfError> {
    let charset_selector = cached_selector(&META_CHARSET, "meta[charset]")?;
    let http_equiv_selector = cached_selector(&META_HTTP_EQUIV, "meta[http-equiv]")?;

    let head = String::from_utf8_lossy(&body[..body.len().min(SNIFF_BYTES)]);
    let document = Html::parse_document(&head);
    for meta in document.select(charset_selector) {
        if let Some(charset) = meta.value().attr("charset").map(str::trim) {
            if !charset.is_empty() {
                return Ok(Some(charset.to_string()));
            }
        }
    }
    Ok(document
        .select(http_equiv_selector)
        .filter(|meta| {
            meta.value()
                .attr("http-equiv")
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("content-type"))
        })
        .filter_map(|meta| meta.value().attr("content"))
        .find_map(charset_from_content_type))
}

/// Decode `body`, preferring the header charset, then a `<meta>` declaration,
/// then UTF-8.
///
/// An unknown header charset is an error; an unknown `<meta>` charset falls
/// back to UTF-8.
fn decode_body(body: &[u8], header_charset: Option<&str>) -> Result<String, WtfError> {
    let encoding = match header_charset {
        Some(label) => match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => encoding,
            None => return Err(WtfError::UnsupportedCharset(label.to_string())),
        },
        None => match sniff_meta_charset(body)? {
            Some(label) => Encoding::for_label(label.as_bytes()).unwrap_or_else(|| {
                warn!(charset = %label, "unknown meta charset, decoding as utf-8");
                UTF_8
            }),
            None => UTF_8,
        },
    };

    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        warn!(encoding = used.name(), "replaced malformed byte sequences");
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_charset_from_content_type() {
        assert_eq!(
            charset_from_content_type("text/html; charset=\"GBK\"").as_deref(),
            Some("GBK")
        );
        assert_eq!(
            charset_from_content_type("text/html;Charset=utf-8").as_deref(),
            Some("utf-8")
        );
        assert_eq!(charset_from_content_type("text/html"), None);
        assert_eq!(charset_from_content_type("text/html; charset="), None);
    }

    #[test]
    fn sniffs_meta_charset() {
        let html = br#"<html><head><meta charset="gb2312"></head></html>"#;
        assert_eq!(sniff_meta_charset(html).unwrap().as_deref(), Some("gb2312"));

        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=GBK">"#;
        assert_eq!(sniff_meta_charset(html).unwrap().as_deref(), Some("GBK"));

        assert_eq!(sniff_meta_charset(b"<html></html>").unwrap(), None);
    }

    #[test]
    fn ignores_charset_mentions_outside_meta() {
        let html = r#"<script>var q = "a?charset=x-none";</script><!-- charset=bogus --><meta charset="utf-8"><p>héllo</p>"#;
        assert_eq!(
            sniff_meta_charset(html.as_bytes()).unwrap().as_deref(),
            Some("utf-8")
        );
        let text = decode_body(html.as_bytes(), None).expect("utf-8 page decodes");
        assert!(text.contains("héllo"));

        let html = br#"<script>var q = "a?charset=x-none";</script><p>plain</p>"#;
        assert_eq!(sniff_meta_charset(html).unwrap(), None);
        assert!(decode_body(html, None).is_ok());
    }

    #[test]
    fn unknown_meta_charset_falls_back_to_utf8() {
        let html = "<meta charset=\"x-none\"><p>héllo</p>";
        let text = decode_body(html.as_bytes(), None).expect("falls back to utf-8");
        assert!(text.contains("héllo"));
    }

    #[test]
    fn sniffs_meta_charset_with_spaced_attribute() {
        let (bytes, _, _) = encoding_rs::GBK.encode(r#"<meta charset = "gbk"><p>你好</p>"#);
        let text = decode_body(&bytes, None).expect("gbk is supported");
        assert!(text.contains("你好"));
    }

    #[test]
    fn decodes_with_header_charset() {
        let (bytes, _, _) = encoding_rs::GBK.encode("你好");
        let text = decode_body(&bytes, Some("gbk")).expect("gbk is supported");
        assert_eq!(text, "你好");
    }

    #[test]
    fn decodes_with_sniffed_charset() {
        let (bytes, _, _) =
            encoding_rs::GBK.encode(r#"<meta charset="gbk"><p>你好</p>"#);
        let text = decode_body(&bytes, None).expect("gbk is supported");
        assert!(text.contains("你好"));
    }

    #[test]
    fn falls_back_to_utf8() {
        let text = decode_body("héllo".as_bytes(), None).expect("utf-8 body");
        assert_eq!(text, "héllo");
    }

    #[test]
    fn rejects_unknown_charset() {
        let err = decode_body(b"hello", Some("klingon")).unwrap_err();
        assert!(matches!(err, WtfError::UnsupportedCharset(label) if label == "klingon"));
    }
}
