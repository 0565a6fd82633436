//! Clause segmentation over the two-tier clause scheme.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{ClauseRole, Classifier};
use crate::marker::Marker;
use crate::verse_key::VerseKey;

/// A non-empty run of markers, normally closed by a terminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    markers: Vec<Marker<ClauseRole>>,
}

impl Clause {
    pub fn markers(&self) -> &[Marker<ClauseRole>] {
        &self.markers
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.iter().map(|marker| marker.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Always false for clauses produced by [`ClauseSegmenter`].
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// False only for a trailing clause the verse never closed.
    pub fn is_terminated(&self) -> bool {
        self.markers
            .last()
            .map_or(false, |marker| marker.category == ClauseRole::Terminator)
    }
}

/// Splits a verse's markers into clauses.
///
/// Terminators close the open clause (and belong to it), continuers extend
/// it, and codes without a clause role are neither content nor boundary. A
/// verse that ends mid-clause still yields that clause.
///
/// ```
/// use layered_taamim::ClauseSegmenter;
///
/// let clauses = ClauseSegmenter::default().segment(&["01", "00", "65"]);
/// let codes: Vec<Vec<&str>> = clauses.iter().map(|c| c.codes().collect()).collect();
/// assert_eq!(codes, vec![vec!["01", "00"], vec!["65"]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClauseSegmenter {
    classifier: Classifier,
}

impl ClauseSegmenter {
    pub fn new(classifier: Classifier) -> Self {
        ClauseSegmenter { classifier }
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn segment<S: AsRef<str>>(&self, codes: &[S]) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let mut current = Vec::new();

        for code in codes {
            let code = code.as_ref().trim();
            match self.classifier.clause_role(code) {
                Some(role @ ClauseRole::Terminator) => {
                    current.push(Marker::new(code, role));
                    clauses.push(Clause {
                        markers: std::mem::take(&mut current),
                    });
                }
                Some(role @ ClauseRole::Continuer) => current.push(Marker::new(code, role)),
                None => {}
            }
        }

        if !current.is_empty() {
            clauses.push(Clause { markers: current });
        }

        clauses
    }
}

/// Renders a verse's clauses as a `verse: <key>:` header and one numbered
/// line per clause.
//
// verse: 0:1:1:
//   0. 01 00
//   1. 65
pub struct ClauseListDisplay<'a> {
    key: VerseKey,
    clauses: &'a [Clause],
}

impl<'a> ClauseListDisplay<'a> {
    pub fn new(key: VerseKey, clauses: &'a [Clause]) -> Self {
        ClauseListDisplay { key, clauses }
    }
}

impl<'a> fmt::Display for ClauseListDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "verse: {}:", self.key)?;
        for (idx, clause) in self.clauses.iter().enumerate() {
            write!(f, "\n  {}.", idx)?;
            for code in clause.codes() {
                write!(f, " {}", code)?;
            }
        }
        Ok(())
    }
}
