//! RON snapshots of a corpus pass, for golden-file comparison.

use serde::{Deserialize, Serialize};

use layered_taamim::{VerseAnalysis, VerseKey, VerseRegistry};

use crate::pass::CorpusReport;

/// Serializable view of one verse. The tree is stored flattened: marker
/// codes in pre-order and their parent pointers, `-1` for the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseSnapshot {
    pub key: VerseKey,
    pub markers: Vec<String>,
    pub heads: Vec<i64>,
    pub clauses: Vec<Vec<String>>,
    pub tree_depth: usize,
    pub dependency_depth: Option<usize>,
}

impl VerseSnapshot {
    pub fn new(key: VerseKey, analysis: &VerseAnalysis) -> Self {
        VerseSnapshot {
            key,
            markers: analysis.tree.markers().map(|m| m.code.clone()).collect(),
            heads: analysis.tree.to_parent_pointers().to_wire(),
            clauses: analysis
                .clauses
                .iter()
                .map(|clause| clause.codes().map(str::to_string).collect())
                .collect(),
            tree_depth: analysis.tree_depth,
            dependency_depth: analysis.dependency_depth,
        }
    }
}

/// Serializable view of a whole pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusSnapshot {
    pub verses: Vec<VerseSnapshot>,
    /// Verses that failed, as their error messages.
    #[serde(default)]
    pub failures: Vec<String>,
}

impl CorpusSnapshot {
    pub fn from_analyses(analyses: &VerseRegistry<VerseAnalysis>) -> Self {
        CorpusSnapshot {
            verses: analyses
                .iter()
                .map(|(key, analysis)| VerseSnapshot::new(*key, analysis))
                .collect(),
            failures: Vec::new(),
        }
    }

    pub fn from_report(report: &CorpusReport) -> Self {
        CorpusSnapshot {
            failures: report.failures.iter().map(|e| e.to_string()).collect(),
            ..CorpusSnapshot::from_analyses(&report.analyses)
        }
    }

    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(10)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(self, config)
    }

    pub fn from_ron_string(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}
