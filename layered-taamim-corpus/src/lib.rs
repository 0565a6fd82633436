#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Whole-corpus passes for `layered-taamim`.
//!
//! Reads marker tables and Dicta dependency parses, runs the per-verse
//! analyzer over every verse (optionally on the rayon pool), and writes the
//! trees, clause lists and depths back out as text reports or a RON
//! snapshot. A verse that fails is logged and listed in the
//! [`CorpusReport`]; the rest of the pass carries on.
//!
//! ```
//! use layered_taamim_corpus::{parse_marker_rows, write_depths, CorpusPass};
//!
//! let rows = parse_marker_rows("Bgn1:1\t14/65/92\nBgn1:2\t92\n").unwrap();
//! let report = CorpusPass::default().run(&rows, &[]);
//!
//! let depths = report.analyses.map(|_, analysis| analysis.tree_depth);
//! let mut out = Vec::new();
//! write_depths(&mut out, &depths).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "verse\tbook\tdepth\n0:1:1\tGenesis\t3\n0:1:2\tGenesis\t1\n"
//! );
//! ```

mod dicta;
mod errors;
mod loader;
mod pass;
mod report;
mod rows;
mod snapshot;

pub use dicta::{parse_dicta_json, DependencyParse, DictaVerse, PredictedToken, Prediction, Syntax, VerseNumber};
pub use errors::{CorpusError, CorpusResult};
pub use loader::{load_dicta, load_dicta_dir, load_marker_rows};
pub use pass::{CorpusPass, CorpusReport};
pub use report::{write_clauses, write_depths, write_summaries, write_trees};
pub use rows::{parse_marker_rows, split_marker_field, MarkerRow};
pub use snapshot::{CorpusSnapshot, VerseSnapshot};

#[cfg(test)]
mod tests {
    mod fixtures;
    mod pass;
    mod reports;
}
