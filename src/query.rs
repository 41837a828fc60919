use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

use crate::{Engine, WtfError};

/// Destination language of a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    /// Chinese, the dictionary's native language.
    #[default]
    Chs,
    Eng,
    Jap,
    Fr,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::Chs => "chs",
            Self::Eng => "eng",
            Self::Jap => "jap",
            Self::Fr => "fr",
        }
    }

    /// Whether this is the native language, for which the page carries
    /// pronunciations and same-language definitions.
    pub fn is_base(self) -> bool {
        self == Self::Chs
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = WtfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chs" => Ok(Self::Chs),
            "eng" => Ok(Self::Eng),
            "jap" => Ok(Self::Jap),
            "fr" => Ok(Self::Fr),
            other => Err(WtfError::UnknownLanguage(other.to_string())),
        }
    }
}

/// A single dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    words: Vec<String>,
    language: Language,
    web_translation: bool,
    engine: Engine,
}

impl Query {
    /// Build a query for `words` in `language` using the default engine.
    ///
    /// # Errors
    ///
    /// Returns [`WtfError::EmptyQuery`] when `words` is empty.
    pub fn new<I, S>(words: I, language: Language) -> Result<Self, WtfError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(WtfError::EmptyQuery);
        }
        Ok(Self {
            words,
            language,
            web_translation: false,
            engine: Engine::default(),
        })
    }

    pub fn with_web_translation(self, web_translation: bool) -> Self {
        Self {
            web_translation,
            ..self
        }
    }

    pub fn with_engine(self, engine: Engine) -> Self {
        Self { engine, ..self }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn web_translation(&self) -> bool {
        self.web_translation
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// The queried words joined by a single space.
    pub fn title(&self) -> String {
        self.words.join(" ")
    }

    pub(crate) fn is_single_word(&self) -> bool {
        self.words.len() == 1
    }
}
