//! Dependency parses in the Dicta JSON layout.
//!
//! A file holds one book: an array of verses, each with a `prediction` whose
//! first entry lists the tokens and their `dep_head_idx`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use layered_taamim::{Book, DepthError, ParentPointers, VerseKey};

use crate::errors::CorpusError;

/// Chapter and verse numbers appear both as numbers and as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VerseNumber {
    Number(u32),
    Text(String),
}

impl VerseNumber {
    fn value(&self) -> Option<u32> {
        match self {
            VerseNumber::Number(n) => Some(*n),
            VerseNumber::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictaVerse {
    pub chapter: VerseNumber,
    pub verse: VerseNumber,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub prediction: Vec<Prediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub tokens: Vec<PredictedToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedToken {
    #[serde(default)]
    pub token: Option<String>,
    pub syntax: Syntax,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Syntax {
    pub dep_head_idx: i64,
    #[serde(default)]
    pub dep_func: Option<String>,
}

/// Raw head indices of one verse, validated only when converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyParse {
    pub key: VerseKey,
    pub heads: Vec<i64>,
}

impl DependencyParse {
    pub fn pointers(&self) -> Result<ParentPointers, DepthError> {
        ParentPointers::from_heads(&self.heads)
    }
}

/// Read a book's dependency parses.
///
/// Verses without a prediction are skipped. Out-of-range heads are not
/// checked here so that one bad verse can be reported on its own later.
pub fn parse_dicta_json(book: Book, text: &str) -> Result<Vec<DependencyParse>, CorpusError> {
    let verses: Vec<DictaVerse> = serde_json::from_str(text)?;
    let mut parses = Vec::with_capacity(verses.len());

    for (idx, verse) in verses.into_iter().enumerate() {
        let (chapter, number) = match (verse.chapter.value(), verse.verse.value()) {
            (Some(chapter), Some(number)) => (chapter, number),
            _ => {
                return Err(CorpusError::Parse {
                    line: idx + 1,
                    message: format!(
                        "bad chapter/verse {:?}/{:?} in {}",
                        verse.chapter,
                        verse.verse,
                        book.name()
                    ),
                })
            }
        };
        let key = VerseKey::new(book, chapter, number);

        let prediction = match verse.prediction.into_iter().next() {
            Some(prediction) => prediction,
            None => {
                debug!("parse_dicta_json: {} has no prediction", key);
                continue;
            }
        };

        parses.push(DependencyParse {
            key,
            heads: prediction
                .tokens
                .iter()
                .map(|token| token.syntax.dep_head_idx)
                .collect(),
        });
    }

    Ok(parses)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "chapter": 1,
            "verse": "1",
            "text": "בראשית ברא אלהים",
            "prediction": [{
                "tokens": [
                    {"token": "בראשית", "syntax": {"dep_head_idx": 1, "dep_func": "obl"}},
                    {"token": "ברא", "syntax": {"dep_head_idx": -1, "dep_func": "root"}},
                    {"token": "אלהים", "syntax": {"dep_head_idx": 1, "dep_func": "nsubj"}}
                ]
            }]
        },
        {"chapter": "1", "verse": "2", "text": "", "prediction": []}
    ]"#;

    #[test]
    fn test_parse_sample() {
        let parses = parse_dicta_json(Book::Genesis, SAMPLE).unwrap();

        assert_eq!(
            parses,
            vec![DependencyParse {
                key: VerseKey::new(Book::Genesis, 1, 1),
                heads: vec![1, -1, 1],
            }]
        );
        assert_eq!(layered_taamim::max_depth(&parses[0].pointers().unwrap()), Ok(2));
    }

    #[test]
    fn test_bad_heads_survive_parsing() {
        let text = r#"[{"chapter": 3, "verse": 4, "prediction": [{"tokens": [
            {"syntax": {"dep_head_idx": 9}}
        ]}]}]"#;
        let parses = parse_dicta_json(Book::Numbers, text).unwrap();

        assert!(matches!(
            parses[0].pointers(),
            Err(DepthError::HeadOutOfRange { token: 0, head: 9, .. })
        ));
    }

    #[test]
    fn test_bad_verse_number() {
        let text = r#"[{"chapter": "x", "verse": 1, "prediction": []}]"#;
        assert!(matches!(
            parse_dicta_json(Book::Genesis, text),
            Err(CorpusError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_dicta_json(Book::Genesis, "{"),
            Err(CorpusError::Json(_))
        ));
    }
}
