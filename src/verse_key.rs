//! Verse identifiers.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::VerseKeyError;

/// The books covered by the corpus, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Book {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
}

impl Book {
    pub const ALL: [Book; 5] = [
        Book::Genesis,
        Book::Exodus,
        Book::Leviticus,
        Book::Numbers,
        Book::Deuteronomy,
    ];

    /// Position used in the canonical key form (`0` for Genesis).
    pub fn index(self) -> usize {
        match self {
            Book::Genesis => 0,
            Book::Exodus => 1,
            Book::Leviticus => 2,
            Book::Numbers => 3,
            Book::Deuteronomy => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Book> {
        Book::ALL.get(index).copied()
    }

    /// Two-letter abbreviation used in marker references (`gn`, `ex`, ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Book::Genesis => "gn",
            Book::Exodus => "ex",
            Book::Leviticus => "lv",
            Book::Numbers => "nu",
            Book::Deuteronomy => "dt",
        }
    }

    pub fn from_abbreviation(abbreviation: &str) -> Option<Book> {
        let abbreviation = abbreviation.to_ascii_lowercase();
        Book::ALL
            .iter()
            .copied()
            .find(|book| book.abbreviation() == abbreviation)
    }

    pub fn name(self) -> &'static str {
        match self {
            Book::Genesis => "Genesis",
            Book::Exodus => "Exodus",
            Book::Leviticus => "Leviticus",
            Book::Numbers => "Numbers",
            Book::Deuteronomy => "Deuteronomy",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Book> {
        let name = name.trim();
        Book::ALL
            .iter()
            .copied()
            .find(|book| book.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(book, chapter, verse)`, ordered canonically.
///
/// The string form is `"<book-index>:<chapter>:<verse>"`:
///
/// ```
/// use layered_taamim::{Book, VerseKey};
///
/// let key: VerseKey = "1:20:2".parse().unwrap();
/// assert_eq!(key, VerseKey::new(Book::Exodus, 20, 2));
/// assert_eq!(key.to_string(), "1:20:2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerseKey {
    pub book: Book,
    pub chapter: u32,
    pub verse: u32,
}

/// `<prefix char><book abbreviation><chapter>:<verse>` with optional trailing text.
static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*.([A-Za-z]{2})(\d+):(\d+)(?:\s.*)?$").expect("reference pattern is valid")
});

impl VerseKey {
    pub fn new(book: Book, chapter: u32, verse: u32) -> Self {
        VerseKey { book, chapter, verse }
    }

    /// Parse a marker-table reference such as `"Bgn1:1 בראשית"`.
    ///
    /// The first character is a source prefix and is ignored, the next two
    /// letters name the book.
    pub fn from_reference(reference: &str) -> Result<Self, VerseKeyError> {
        let captures = REFERENCE.captures(reference).ok_or_else(|| VerseKeyError::Malformed {
            input: reference.to_string(),
        })?;

        let book = Book::from_abbreviation(&captures[1]).ok_or_else(|| VerseKeyError::UnknownBook {
            book: captures[1].to_string(),
        })?;
        let chapter = parse_number(&captures[2], reference)?;
        let verse = parse_number(&captures[3], reference)?;

        Ok(VerseKey::new(book, chapter, verse))
    }
}

fn parse_number(digits: &str, input: &str) -> Result<u32, VerseKeyError> {
    digits.parse().map_err(|_| VerseKeyError::Malformed {
        input: input.to_string(),
    })
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.book.index(), self.chapter, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = VerseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || VerseKeyError::Malformed { input: s.to_string() };

        let mut parts = s.trim().split(':');
        let (book, chapter, verse) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(book), Some(chapter), Some(verse), None) => (book, chapter, verse),
            _ => return Err(malformed()),
        };

        let book_index: usize = book.parse().map_err(|_| malformed())?;
        let book = Book::from_index(book_index).ok_or_else(|| VerseKeyError::UnknownBook {
            book: book_index.to_string(),
        })?;

        Ok(VerseKey::new(
            book,
            chapter.parse().map_err(|_| malformed())?,
            verse.parse().map_err(|_| malformed())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_form() {
        let key = VerseKey::new(Book::Genesis, 1, 1);
        assert_eq!(key.to_string(), "0:1:1");
        assert_eq!("0:1:1".parse::<VerseKey>().unwrap(), key);

        let key = VerseKey::new(Book::Deuteronomy, 34, 12);
        assert_eq!(key.to_string(), "4:34:12");
    }

    #[test]
    fn test_malformed_keys() {
        for input in ["", "0:1", "0:1:1:1", "a:1:1", "0:x:1", "0:1:-1"] {
            assert!(
                matches!(input.parse::<VerseKey>(), Err(VerseKeyError::Malformed { .. })),
                "{:?}",
                input
            );
        }
        assert_eq!(
            "7:1:1".parse::<VerseKey>(),
            Err(VerseKeyError::UnknownBook { book: "7".to_string() })
        );
    }

    #[test]
    fn test_ordering_is_canonical() {
        let mut keys = vec![
            VerseKey::new(Book::Exodus, 1, 1),
            VerseKey::new(Book::Genesis, 10, 2),
            VerseKey::new(Book::Genesis, 2, 10),
            VerseKey::new(Book::Genesis, 2, 9),
        ];
        keys.sort();
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["0:2:9", "0:2:10", "0:10:2", "1:1:1"]);
    }

    #[test]
    fn test_from_reference() {
        assert_eq!(
            VerseKey::from_reference("Bgn1:1 בראשית ברא").unwrap(),
            VerseKey::new(Book::Genesis, 1, 1)
        );
        assert_eq!(
            VerseKey::from_reference(" Ldt34:12").unwrap(),
            VerseKey::new(Book::Deuteronomy, 34, 12)
        );
        assert_eq!(
            VerseKey::from_reference("Bjs1:1 text"),
            Err(VerseKeyError::UnknownBook { book: "js".to_string() })
        );
        assert!(matches!(
            VerseKey::from_reference("gn1:1"),
            Err(VerseKeyError::Malformed { .. })
        ));
    }

    #[test]
    fn test_book_lookups() {
        for book in Book::ALL {
            assert_eq!(Book::from_index(book.index()), Some(book));
            assert_eq!(Book::from_abbreviation(book.abbreviation()), Some(book));
            assert_eq!(Book::from_name(&book.name().to_lowercase()), Some(book));
        }
        assert_eq!(Book::from_index(5), None);
    }
}
