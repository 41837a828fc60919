use clap::ValueEnum;
use reqwest::Url;
use std::fmt;
use std::str::FromStr;
use tracing::info;

use crate::{parse_report_from_html, DocumentSource, Query, Report, WtfError};

const YOUDAO_WORD_URL: &str = "https://www.youdao.com/w/";

/// Dictionary backend a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Engine {
    #[default]
    Youdao,
    /// Reserved for a future backend; every lookup is empty.
    Google,
}

impl Engine {
    pub fn name(self) -> &'static str {
        match self {
            Self::Youdao => "youdao",
            Self::Google => "google",
        }
    }

    /// Page URL for `query`, empty for engines without a backend.
    pub fn url(self, query: &Query) -> Result<String, WtfError> {
        match self {
            Self::Youdao => youdao_url(query),
            Self::Google => Ok(String::new()),
        }
    }

    /// Fetch the page for `query` from `source` and extract a report.
    ///
    /// # Errors
    ///
    /// Fetch and decode failures from `source` are returned unchanged; no
    /// report is produced for them.
    pub fn execute(self, query: &Query, source: &dyn DocumentSource) -> Result<Report, WtfError> {
        match self {
            Self::Youdao => {
                let url = self.url(query)?;
                info!(engine = self.name(), %url, "querying");
                let html = source.fetch(&url)?;
                let mut report = parse_report_from_html(query, &html)?;
                report.origin = url;
                Ok(report)
            }
            Self::Google => Ok(Report::default()),
        }
    }
}

fn youdao_url(query: &Query) -> Result<String, WtfError> {
    let mut url = Url::parse(YOUDAO_WORD_URL).map_err(WtfError::BuildRequestUrl)?;
    url.path_segments_mut()
        .map_err(|()| WtfError::BuildRequestUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend((!query.language().is_base()).then(|| query.language().code()))
        .push(&query.title());
    Ok(url.into())
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = WtfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youdao" => Ok(Self::Youdao),
            "google" => Ok(Self::Google),
            other => Err(WtfError::UnknownEngine(other.to_string())),
        }
    }
}
