//! Marker rows: one verse reference and its `/`-separated marker field.

use tracing::debug;

use layered_taamim::{VerseKey, VerseKeyError};

use crate::errors::CorpusError;

/// Marker codes of one verse, placeholders already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRow {
    pub key: VerseKey,
    pub codes: Vec<String>,
}

/// Split a marker field on `/`, dropping blanks and `-` placeholders.
///
/// ```
/// use layered_taamim_corpus::split_marker_field;
///
/// assert_eq!(split_marker_field(" 01/ -/65 /92/"), vec!["01", "65", "92"]);
/// ```
pub fn split_marker_field(field: &str) -> Vec<String> {
    field
        .split('/')
        .map(str::trim)
        .filter(|code| !code.is_empty() && *code != "-")
        .map(str::to_string)
        .collect()
}

/// Parse tab-separated `<reference>\t<marker field>` lines.
///
/// Blank lines are skipped, as are rows whose reference names a book outside
/// the corpus. Any other malformed line fails the whole parse.
pub fn parse_marker_rows(text: &str) -> Result<Vec<MarkerRow>, CorpusError> {
    let mut rows = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_number = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (reference, field) = line.split_once('\t').ok_or_else(|| CorpusError::Parse {
            line: line_number,
            message: "expected <reference>\\t<markers>".to_string(),
        })?;

        let key = match VerseKey::from_reference(reference) {
            Ok(key) => key,
            Err(VerseKeyError::UnknownBook { book }) => {
                debug!("parse_marker_rows: skipping line {} (book {:?})", line_number, book);
                continue;
            }
            Err(e) => {
                return Err(CorpusError::Parse {
                    line: line_number,
                    message: e.to_string(),
                })
            }
        };

        rows.push(MarkerRow {
            key,
            codes: split_marker_field(field),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layered_taamim::Book;

    #[test]
    fn test_parse_rows() {
        let text = "Bgn1:1 בראשית\t 14/65/ /92\n\nBex2:3\t01/-/00\n";
        let rows = parse_marker_rows(text).unwrap();

        assert_eq!(
            rows,
            vec![
                MarkerRow {
                    key: VerseKey::new(Book::Genesis, 1, 1),
                    codes: vec!["14".into(), "65".into(), "92".into()],
                },
                MarkerRow {
                    key: VerseKey::new(Book::Exodus, 2, 3),
                    codes: vec!["01".into(), "00".into()],
                },
            ]
        );
    }

    #[test]
    fn test_unknown_books_are_skipped() {
        let rows = parse_marker_rows("Bjs1:1\t92\nBdt1:1\t00\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key.book, Book::Deuteronomy);
    }

    #[test]
    fn test_missing_tab_is_an_error() {
        let err = parse_marker_rows("Bgn1:1\t92\nBgn1:2 92\n").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_malformed_reference_is_an_error() {
        let err = parse_marker_rows("Bgn1-1\t92\n").unwrap_err();
        assert!(matches!(err, CorpusError::Parse { line: 1, .. }));
    }
}
