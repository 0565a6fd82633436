//! Per-book averages over a registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::registry::VerseRegistry;
use crate::verse_key::Book;

/// Mean of one metric over the verses of a book that have it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub book: Book,
    pub verses: usize,
    pub mean: f64,
}

/// Average `metric` per book, books in canonical order.
///
/// Verses for which `metric` returns `None` are left out, and books with no
/// measured verse do not appear.
pub fn summarize_by_book<T>(
    registry: &VerseRegistry<T>,
    metric: impl Fn(&T) -> Option<f64>,
) -> Vec<BookSummary> {
    let mut totals: BTreeMap<Book, (usize, f64)> = BTreeMap::new();
    for (key, value) in registry {
        if let Some(measure) = metric(value) {
            let total = totals.entry(key.book).or_insert((0, 0.0));
            total.0 += 1;
            total.1 += measure;
        }
    }

    totals
        .into_iter()
        .map(|(book, (verses, sum))| BookSummary {
            book,
            verses,
            mean: sum / verses as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verse_key::VerseKey;

    #[test]
    fn test_means_per_book() {
        let mut registry = VerseRegistry::new();
        registry.insert(VerseKey::new(Book::Exodus, 1, 1), Some(4)).unwrap();
        registry.insert(VerseKey::new(Book::Genesis, 1, 1), Some(1)).unwrap();
        registry.insert(VerseKey::new(Book::Genesis, 1, 2), Some(2)).unwrap();
        registry.insert(VerseKey::new(Book::Numbers, 1, 1), None).unwrap();

        let summaries = summarize_by_book(&registry, |depth| depth.map(|d| d as f64));

        assert_eq!(
            summaries,
            vec![
                BookSummary {
                    book: Book::Genesis,
                    verses: 2,
                    mean: 1.5
                },
                BookSummary {
                    book: Book::Exodus,
                    verses: 1,
                    mean: 4.0
                },
            ]
        );
    }
}
