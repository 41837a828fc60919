//! Line normalization shared by the extraction rules.

use crate::WtfError;

/// Longest physical line the scanner accepts, in bytes.
pub const MAX_LINE_BYTES: usize = 64 * 1024;

/// Iterator over the trimmed physical lines of a text blob.
///
/// Blank lines are skipped unless the scanner was built with
/// [`LineScanner::keep_blank`]. Yields [`WtfError::LineTooLong`] once when a
/// line exceeds [`MAX_LINE_BYTES`], then stops.
pub struct LineScanner<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    keep_blank: bool,
    failed: bool,
}

impl<'a> LineScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            keep_blank: false,
            failed: false,
        }
    }

    /// Also yield lines that are empty after trimming.
    pub fn keep_blank(self) -> Self {
        Self {
            keep_blank: true,
            ..self
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = Result<&'a str, WtfError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for (index, line) in self.lines.by_ref() {
            if line.len() > MAX_LINE_BYTES {
                self.failed = true;
                return Some(Err(WtfError::LineTooLong { line: index + 1 }));
            }
            let line = line.trim();
            if self.keep_blank || !line.is_empty() {
                return Some(Ok(line));
            }
        }
        None
    }
}

fn collect_lines<'a>(scanner: LineScanner<'a>, context: &str) -> Result<Vec<&'a str>, WtfError> {
    scanner.collect::<Result<Vec<_>, _>>().inspect_err(|err| {
        tracing::warn!(%err, context, "unable to scan lines");
    })
}

/// Split `text` into trimmed, non-empty lines.
///
/// A scan failure is logged and returned; `context` names the caller in the
/// log event.
pub fn scanned_lines<'a>(text: &'a str, context: &str) -> Result<Vec<&'a str>, WtfError> {
    collect_lines(LineScanner::new(text), context)
}

/// Split `text` into trimmed lines, blank ones included.
pub fn physical_lines<'a>(text: &'a str, context: &str) -> Result<Vec<&'a str>, WtfError> {
    collect_lines(LineScanner::new(text).keep_blank(), context)
}

/// Split `text` into trimmed, non-empty lines, keeping the lines read before
/// a scan failure.
pub fn normalized_lines<'a>(text: &'a str, context: &str) -> Vec<&'a str> {
    let mut lines = Vec::new();
    for line in LineScanner::new(text) {
        match line {
            Ok(line) => lines.push(line),
            Err(err) => {
                tracing::warn!(%err, context, "unable to scan lines");
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_lines_and_trims() {
        let text = "  英\n\n   [həˈləʊ]  \r\n\t\n美 \n";
        assert_eq!(normalized_lines(text, "test"), vec!["英", "[həˈləʊ]", "美"]);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let once = normalized_lines("\n a \n\n b\n   c  ", "test");
        let joined = once.join("\n");
        assert_eq!(normalized_lines(&joined, "test"), once);
    }

    #[test]
    fn physical_lines_keep_blanks() {
        let lines = physical_lines("a\n   \n b ", "test").unwrap();
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn long_line_stops_scan_with_partial_result() {
        let long = "x".repeat(MAX_LINE_BYTES + 1);
        let text = format!("first\nsecond\n{long}\nafter");

        let mut scanner = LineScanner::new(&text);
        assert_eq!(scanner.next().unwrap().unwrap(), "first");
        assert_eq!(scanner.next().unwrap().unwrap(), "second");
        assert!(matches!(
            scanner.next(),
            Some(Err(WtfError::LineTooLong { line: 3 }))
        ));
        assert!(scanner.next().is_none());

        assert_eq!(normalized_lines(&text, "test"), vec!["first", "second"]);
        assert!(matches!(
            scanned_lines(&text, "test"),
            Err(WtfError::LineTooLong { line: 3 })
        ));
    }
}
