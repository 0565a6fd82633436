//! One pass of the engine over a whole corpus.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use layered_taamim::{
    max_depth, Analyzer, Classifier, ParentPointers, VerseAnalysis, VerseError, VerseKey,
    VerseRegistry,
};

use crate::dicta::DependencyParse;
use crate::rows::MarkerRow;

/// Everything a pass produced. Failed verses are listed, never fatal.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    pub analyses: VerseRegistry<VerseAnalysis>,
    /// Depth of every well-formed dependency parse, with or without a
    /// matching marker row.
    pub dependency_depths: VerseRegistry<usize>,
    pub failures: Vec<VerseError>,
}

impl CorpusReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs an [`Analyzer`] over marker rows and dependency parses.
///
/// Results are registered in input order, so the first of two rows for the
/// same verse wins and the second is reported as a failure, in both the
/// sequential and the parallel pass.
#[derive(Debug, Clone, Default)]
pub struct CorpusPass {
    analyzer: Analyzer,
}

type Measured = (VerseKey, Result<(ParentPointers, usize), VerseError>);

/// A dependency parse that passed the depth analyzer.
#[derive(Debug)]
struct ParsedVerse {
    pointers: ParentPointers,
    depth: usize,
}
type Analyzed = (VerseKey, Result<VerseAnalysis, VerseError>);

impl CorpusPass {
    pub fn new(analyzer: Analyzer) -> Self {
        CorpusPass { analyzer }
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        CorpusPass::new(Analyzer::new(classifier))
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    pub fn run(&self, rows: &[MarkerRow], parses: &[DependencyParse]) -> CorpusReport {
        info!("run: {} marker rows, {} dependency parses", rows.len(), parses.len());

        let measured: Vec<Measured> = parses.iter().map(measure).collect();
        let mut report = CorpusReport::default();
        let parsed = register_depths(&mut report, measured);

        let analyzed: Vec<Analyzed> = rows
            .iter()
            .map(|row| self.analyze_row(row, &parsed))
            .collect();
        register_analyses(&mut report, analyzed);

        log_outcome(&report);
        report
    }

    /// Same result as [`CorpusPass::run`], with verses analyzed on the rayon
    /// thread pool.
    pub fn run_parallel(&self, rows: &[MarkerRow], parses: &[DependencyParse]) -> CorpusReport {
        if rows.is_empty() && parses.is_empty() {
            warn!("run_parallel: nothing to analyze");
            return CorpusReport::default();
        }
        info!(
            "run_parallel: {} marker rows, {} dependency parses",
            rows.len(),
            parses.len()
        );

        let measured: Vec<Measured> = parses.par_iter().map(measure).collect();
        let mut report = CorpusReport::default();
        let parsed = register_depths(&mut report, measured);

        let analyzed: Vec<Analyzed> = rows
            .par_iter()
            .map(|row| self.analyze_row(row, &parsed))
            .collect();
        debug!("run_parallel: analyzed {} verses", analyzed.len());
        register_analyses(&mut report, analyzed);

        log_outcome(&report);
        report
    }

    fn analyze_row(&self, row: &MarkerRow, parsed: &VerseRegistry<ParsedVerse>) -> Analyzed {
        let pointers = parsed.get(&row.key).map(|verse| &verse.pointers);
        (row.key, self.analyzer.analyze(row.key, &row.codes, pointers))
    }
}

fn measure(parse: &DependencyParse) -> Measured {
    let result = parse
        .pointers()
        .and_then(|pointers| max_depth(&pointers).map(|depth| (pointers, depth)))
        .map_err(|e| VerseError::new(parse.key, e));
    (parse.key, result)
}

/// Record depths and keep the well-formed parses for the marker pass.
fn register_depths(report: &mut CorpusReport, measured: Vec<Measured>) -> VerseRegistry<ParsedVerse> {
    let mut parsed = VerseRegistry::new();
    for (key, result) in measured {
        let outcome = result.and_then(|(pointers, depth)| {
            parsed
                .insert(key, ParsedVerse { pointers, depth })
                .map_err(|e| VerseError::new(key, e))
        });
        if let Err(e) = outcome {
            fail(report, e);
        }
    }
    report.dependency_depths = parsed.map(|_, verse| verse.depth);
    parsed
}

fn register_analyses(report: &mut CorpusReport, analyzed: Vec<Analyzed>) {
    for (key, result) in analyzed {
        let outcome = result.and_then(|analysis| {
            report
                .analyses
                .insert(key, analysis)
                .map_err(|e| VerseError::new(key, e))
        });
        if let Err(e) = outcome {
            fail(report, e);
        }
    }
}

fn fail(report: &mut CorpusReport, error: VerseError) {
    warn!("{}", error);
    report.failures.push(error);
}

fn log_outcome(report: &CorpusReport) {
    info!(
        "analyzed {} verses, {} dependency depths, {} failures",
        report.analyses.len(),
        report.dependency_depths.len(),
        report.failures.len()
    );
}
