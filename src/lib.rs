#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Cantillation marker analytics for verse corpora.
//!
//! Each verse arrives as a flat, ordered list of marker codes. This crate
//! turns that list into:
//!
//! - a rooted [`MarkerTree`], grouping markers by tier precedence
//!   ([`TreeBuilder`]),
//! - an ordered list of [`Clause`]s ([`ClauseSegmenter`]),
//! - structural depths, both of marker trees and of dependency parses given
//!   as [`ParentPointers`] ([`max_depth`]).
//!
//! Results are collected per verse in a write-once [`VerseRegistry`].
//!
//! ## Example
//!
//! ```
//! use layered_taamim::{Analyzer, Book, MarkerTreeDisplay, VerseKey};
//!
//! let key = VerseKey::new(Book::Genesis, 1, 1);
//! let analysis = Analyzer::default()
//!     .analyze(key, &["14", "65", "92"], None)
//!     .unwrap();
//!
//! assert_eq!(analysis.tree_depth, 3);
//! assert_eq!(
//!     MarkerTreeDisplay::new(&analysis.tree).with_key(key).to_string(),
//!     "P: 0:1:1\nroot\n└── 92\n    └── 65\n        └── 14"
//! );
//! ```

mod analysis;
mod category;
mod clause;
mod config;
mod depth;
mod errors;
mod marker;
mod marker_tree;
mod registry;
mod summary;
mod verse_key;

pub use analysis::{Analyzer, VerseAnalysis};
pub use category::{Category, ClauseRole, ClauseTable, Classifier, Scheme, Tier, TierTable};
pub use clause::{Clause, ClauseListDisplay, ClauseSegmenter};
pub use config::{ClauseCodes, SchemeConfig, TierCodes};
pub use depth::{max_depth, ParentPointers, ROOT_SENTINEL};
pub use errors::{
    ConfigError, DepthError, RegistryError, TaamimError, TaamimResult, VerseError, VerseKeyError,
};
pub use marker::Marker;
pub use marker_tree::{MarkerTree, MarkerTreeDisplay, NodeId, Preorder, TreeBuilder, ROOT};
pub use registry::VerseRegistry;
pub use summary::{summarize_by_book, BookSummary};
pub use verse_key::{Book, VerseKey};

/// Build a tree with the default tables.
pub fn build_tree<S: AsRef<str>>(codes: &[S]) -> MarkerTree {
    TreeBuilder::default().build(codes)
}

/// Segment clauses with the default tables.
pub fn segment_clauses<S: AsRef<str>>(codes: &[S]) -> Vec<Clause> {
    ClauseSegmenter::default().segment(codes)
}

#[cfg(test)]
mod tests {
    mod analysis;
    mod clauses;
    mod depth;
    mod properties;
    mod tree;
}
