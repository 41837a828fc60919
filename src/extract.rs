//! Extraction rules, one per facet of a [`Report`].
//!
//! Each rule reads the parsed page and returns its entries in document order.
//! Missing structure yields an empty list; only a broken selector literal is an
//! error.

use scraper::Html;
use tracing::debug;

use crate::lines::{normalized_lines, physical_lines, scanned_lines};
use crate::selector::{
    cached_selector, first, trimmed_text, COLLAPSE_CONTENT, CONTENT_TITLE, DEFINITION_ITEM,
    EXAMPLE_SENTENCE, LINK, ORDERED_SENSE, PARAGRAPH, PRONOUNCE, PRONOUNCE_CONTAINER,
    SENSE_CONTAINER, SENSE_EXAMPLE, SENSE_TITLE, SPAN, UNORDERED_SENSE, WEB_PHRASE_GROUP,
    WEB_TRANS_CONTAINER, WEB_TRANS_TITLE, WORD_GROUP,
};
use crate::{Language, Pronounce, Query, Report, WtfError};

const EXAMPLE_INDENT: &str = "     ";
const BLOCK_INDENT: &str = "    ";

/// Build a report from a Youdao result page.
///
/// This function does not perform network I/O; `origin` is left empty.
///
/// # Examples
///
/// ```
/// let html = r#"
/// <div id="phrsListTab">
///   <div class="trans-container">
///     <ul>
///       <p class="wordGroup">
///         <span>n.</span>
///         <span class="contentTitle"><a>greeting</a></span>
///       </p>
///     </ul>
///   </div>
/// </div>
/// "#;
/// let query = wtf::Query::new(["hello"], wtf::Language::Eng).unwrap();
/// let report = wtf::parse_report_from_html(&query, html).unwrap();
/// assert_eq!(report.translations, vec!["n.       greeting"]);
/// ```
pub fn parse_report_from_html(query: &Query, html: &str) -> Result<Report, WtfError> {
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        debug!(count = document.errors.len(), "tolerated html parse errors");
    }

    let mut report = Report {
        title: query.title(),
        ..Report::default()
    };

    match query.language() {
        Language::Chs if query.is_single_word() => {
            report.pronunciations = extract_pronunciations(&document)?;
            report.translations = extract_definitions(&document)?;
        }
        Language::Chs => debug!("multi-word query, skipping definitions"),
        Language::Eng => report.translations = extract_word_groups(&document)?,
        Language::Jap => report.translations = extract_senses(&document)?,
        Language::Fr => debug!("no sense rule for fr"),
    }

    if query.web_translation() {
        report.web_translations = extract_web_translations(&document)?;
        report.web_phrases = extract_web_phrases(&document)?;
    }

    debug!(
        pronunciations = report.pronunciations.len(),
        translations = report.translations.len(),
        web_translations = report.web_translations.len(),
        web_phrases = report.web_phrases.len(),
        "extracted report"
    );
    Ok(report)
}

/// Phonetic entries of a single-word query.
///
/// A line holding `[` is a transcription; it takes the label of the latest
/// plain line seen in the same span.
pub fn extract_pronunciations(document: &Html) -> Result<Vec<Pronounce>, WtfError> {
    let container_selector = cached_selector(&PRONOUNCE_CONTAINER, "div.baav")?;
    let pronounce_selector = cached_selector(&PRONOUNCE, "span.pronounce")?;

    let mut pronunciations = Vec::new();
    for container in document.select(container_selector) {
        for span in container.select(pronounce_selector) {
            let text = span.text().collect::<String>();
            let mut name = "";
            for line in normalized_lines(&text, "pronounce") {
                if line.contains('[') {
                    pronunciations.push(Pronounce {
                        name: name.to_string(),
                        phonetic: line.to_string(),
                    });
                } else {
                    name = line;
                }
            }
        }
    }
    Ok(pronunciations)
}

/// Same-language definitions, one per list item.
pub fn extract_definitions(document: &Html) -> Result<Vec<String>, WtfError> {
    let item_selector = cached_selector(&DEFINITION_ITEM, "div#phrsListTab ul li")?;

    Ok(document.select(item_selector).map(trimmed_text).collect())
}

/// English word groups: a part-of-speech marker followed by its terms.
pub fn extract_word_groups(document: &Html) -> Result<Vec<String>, WtfError> {
    let group_selector = cached_selector(
        &WORD_GROUP,
        "div#phrsListTab div.trans-container ul p.wordGroup",
    )?;
    let span_selector = cached_selector(&SPAN, "span")?;
    let title_selector = cached_selector(&CONTENT_TITLE, "span.contentTitle")?;
    let link_selector = cached_selector(&LINK, "a")?;

    let mut translations = Vec::new();
    for group in document.select(group_selector) {
        let Some(marker) = first(group, span_selector) else {
            continue;
        };
        let titles = group
            .select(title_selector)
            .filter_map(|title| first(title, link_selector))
            .map(trimmed_text)
            .collect::<Vec<_>>();
        translations.push(format!("{:<8} {}", trimmed_text(marker), titles.join("; ")));
    }
    Ok(translations)
}

/// Japanese senses: numbered titles, then titled senses with examples.
pub fn extract_senses(document: &Html) -> Result<Vec<String>, WtfError> {
    let container_selector =
        cached_selector(&SENSE_CONTAINER, "div#results-contents .trans-container")?;
    let ordered_selector = cached_selector(&ORDERED_SENSE, "ul.ol li")?;
    let unordered_selector = cached_selector(&UNORDERED_SENSE, "ul.ul>li")?;
    let title_selector = cached_selector(&SENSE_TITLE, "p.sense-title")?;
    let example_selector = cached_selector(&SENSE_EXAMPLE, "ul.sense-ex li")?;
    let paragraph_selector = cached_selector(&PARAGRAPH, "p")?;
    let sentence_selector = cached_selector(&EXAMPLE_SENTENCE, "p.exam-sen")?;

    let mut translations = Vec::new();
    let Some(container) = document.select(container_selector).next() else {
        return Ok(translations);
    };

    for (index, sense) in container.select(ordered_selector).enumerate() {
        if let Some(title) = first(sense, title_selector).map(trimmed_text) {
            if !title.is_empty() {
                translations.push(format!("{}. {}", index + 1, title));
            }
        }
    }

    for sense in container.select(unordered_selector) {
        if let Some(title) = first(sense, title_selector) {
            translations.push(trimmed_text(title));
        }
        for example in sense.select(example_selector) {
            let Some(description) = first(example, paragraph_selector) else {
                continue;
            };
            let text = description.text().collect::<String>();
            let Ok(lines) = scanned_lines(&text, "sense example") else {
                continue;
            };
            translations.push(lines.concat());
            if let Some(sentence) = first(example, sentence_selector) {
                translations.push(format!("{EXAMPLE_INDENT}{}", trimmed_text(sentence)));
            }
        }
    }
    Ok(translations)
}

/// Web translation blocks: a title line followed by indented content lines.
pub fn extract_web_translations(document: &Html) -> Result<Vec<String>, WtfError> {
    let container_selector =
        cached_selector(&WEB_TRANS_CONTAINER, "div#tWebTrans div.wt-container")?;
    let title_selector = cached_selector(&WEB_TRANS_TITLE, "div.title span")?;
    let content_selector = cached_selector(&COLLAPSE_CONTENT, "p.collapse-content")?;

    let mut blocks = Vec::new();
    for container in document.select(container_selector) {
        let (Some(title), Some(content)) = (
            first(container, title_selector),
            first(container, content_selector),
        ) else {
            continue;
        };

        let text = content.text().collect::<String>();
        let Ok(lines) = physical_lines(text.trim(), "web translation") else {
            continue;
        };

        let mut block = trimmed_text(title);
        block.push('\n');
        for line in lines {
            block.push_str(BLOCK_INDENT);
            block.push_str(line);
            block.push('\n');
        }
        blocks.push(block);
    }
    Ok(blocks)
}

/// Web phrases: the phrase followed by its semicolon-joined usages.
pub fn extract_web_phrases(document: &Html) -> Result<Vec<String>, WtfError> {
    let group_selector = cached_selector(&WEB_PHRASE_GROUP, "div#webPhrase p.wordGroup")?;

    let mut phrases = Vec::new();
    for group in document.select(group_selector) {
        let text = group.text().collect::<String>();
        let Ok(usages) = scanned_lines(&text, "web phrase") else {
            continue;
        };
        let usages = usages
            .into_iter()
            .filter(|usage| usage.len() > 1)
            .collect::<Vec<_>>();
        if let [phrase, rest @ ..] = usages.as_slice() {
            if !rest.is_empty() {
                phrases.push(format!("{phrase:<8} {}", rest.join("; ")));
            }
        }
    }
    Ok(phrases)
}
