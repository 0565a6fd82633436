//! Everything the engine derives for one verse.

use crate::category::Classifier;
use crate::clause::{Clause, ClauseSegmenter};
use crate::depth::{max_depth, ParentPointers};
use crate::errors::{RegistryError, VerseError};
use crate::marker_tree::{MarkerTree, TreeBuilder};
use crate::registry::VerseRegistry;
use crate::verse_key::VerseKey;

/// Tree, clauses and depths of a single verse.
#[derive(Debug, Clone, PartialEq)]
pub struct VerseAnalysis {
    pub tree: MarkerTree,
    pub clauses: Vec<Clause>,
    /// Marker levels below the tree root.
    pub tree_depth: usize,
    /// Depth of the verse's dependency parse, when one was supplied.
    pub dependency_depth: Option<usize>,
}

/// Runs the tree builder, the clause segmenter and the depth analyzer over
/// one verse at a time, with a single set of classification tables.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    trees: TreeBuilder,
    clauses: ClauseSegmenter,
}

impl Analyzer {
    pub fn new(classifier: Classifier) -> Self {
        Analyzer {
            trees: TreeBuilder::new(classifier.clone()),
            clauses: ClauseSegmenter::new(classifier),
        }
    }

    pub fn tree_builder(&self) -> &TreeBuilder {
        &self.trees
    }

    pub fn clause_segmenter(&self) -> &ClauseSegmenter {
        &self.clauses
    }

    /// Analyze one verse. Only a malformed dependency parse can fail, and
    /// the failure carries `key`.
    pub fn analyze<S: AsRef<str>>(
        &self,
        key: VerseKey,
        codes: &[S],
        dependencies: Option<&ParentPointers>,
    ) -> Result<VerseAnalysis, VerseError> {
        let tree = self.trees.build(codes);
        let clauses = self.clauses.segment(codes);
        let tree_depth = tree.depth();
        let dependency_depth = dependencies
            .map(max_depth)
            .transpose()
            .map_err(|e| VerseError::new(key, e))?;

        Ok(VerseAnalysis {
            tree,
            clauses,
            tree_depth,
            dependency_depth,
        })
    }

    /// Analyze and register in one step; a key already present is an error.
    pub fn analyze_into<S: AsRef<str>>(
        &self,
        registry: &mut VerseRegistry<VerseAnalysis>,
        key: VerseKey,
        codes: &[S],
        dependencies: Option<&ParentPointers>,
    ) -> Result<(), VerseError> {
        if registry.contains(&key) {
            return Err(VerseError::new(key, RegistryError::DuplicateKey { key }));
        }
        let analysis = self.analyze(key, codes, dependencies)?;
        registry.insert(key, analysis).map_err(|e| VerseError::new(key, e))
    }
}
