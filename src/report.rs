use std::fmt;

const DELIMITER: &str = "-----------------------";

/// One phonetic entry, e.g. `英 [həˈləʊ]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pronounce {
    pub name: String,
    pub phonetic: String,
}

impl fmt::Display for Pronounce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            f.write_str(&self.phonetic)
        } else {
            write!(f, "{} {}", self.name, self.phonetic)
        }
    }
}

/// Assembled lookup result, rendered as a text block through [`fmt::Display`].
///
/// Every list keeps the order in which its entries appear on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub pronunciations: Vec<Pronounce>,
    pub translations: Vec<String>,
    /// Multi-line blocks, each terminated by a newline.
    pub web_translations: Vec<String>,
    pub web_phrases: Vec<String>,
    pub origin: String,
}

impl Report {
    /// Whether nothing was extracted from the page.
    pub fn is_empty(&self) -> bool {
        self.pronunciations.is_empty()
            && self.translations.is_empty()
            && self.web_translations.is_empty()
            && self.web_phrases.is_empty()
    }
}

fn write_lines<T: fmt::Display>(f: &mut fmt::Formatter<'_>, lines: &[T]) -> fmt::Result {
    for line in lines {
        writeln!(f, "{line}")?;
    }
    writeln!(f, "{DELIMITER}")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DELIMITER}")?;
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{DELIMITER}")?;

        if !self.pronunciations.is_empty() {
            write_lines(f, &self.pronunciations)?;
        }
        if !self.translations.is_empty() {
            write_lines(f, &self.translations)?;
        }
        if !self.web_translations.is_empty() {
            f.write_str("Web Translations\n----\n")?;
            for block in &self.web_translations {
                f.write_str(block)?;
            }
            writeln!(f, "{DELIMITER}")?;
        }
        if !self.web_phrases.is_empty() {
            f.write_str("Web Phrases\n----\n")?;
            write_lines(f, &self.web_phrases)?;
        }
        if !self.origin.is_empty() {
            writeln!(f, "{}", self.origin)?;
            f.write_str(DELIMITER)?;
        }
        Ok(())
    }
}
