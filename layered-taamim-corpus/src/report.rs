//! Plain-text corpus reports.

use std::io::Write;

use layered_taamim::{BookSummary, ClauseListDisplay, MarkerTreeDisplay, VerseAnalysis, VerseRegistry};

use crate::errors::CorpusResult;

/// Every verse's tree, each preceded by a blank line.
pub fn write_trees<W: Write>(out: &mut W, analyses: &VerseRegistry<VerseAnalysis>) -> CorpusResult<()> {
    for (key, analysis) in analyses {
        writeln!(out)?;
        writeln!(out, "{}", MarkerTreeDisplay::new(&analysis.tree).with_key(*key))?;
    }
    Ok(())
}

/// Every verse's clause list, each followed by a blank line.
pub fn write_clauses<W: Write>(out: &mut W, analyses: &VerseRegistry<VerseAnalysis>) -> CorpusResult<()> {
    for (key, analysis) in analyses {
        writeln!(out, "{}", ClauseListDisplay::new(*key, &analysis.clauses))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Tab-separated `verse`, `book`, `depth` rows under a header.
pub fn write_depths<W: Write>(out: &mut W, depths: &VerseRegistry<usize>) -> CorpusResult<()> {
    writeln!(out, "verse\tbook\tdepth")?;
    for (key, depth) in depths {
        writeln!(out, "{}\t{}\t{}", key, key.book.name(), depth)?;
    }
    Ok(())
}

/// Tab-separated per-book means under a header naming the metric.
pub fn write_summaries<W: Write>(out: &mut W, metric: &str, summaries: &[BookSummary]) -> CorpusResult<()> {
    writeln!(out, "book\tverses\t{}", metric)?;
    for summary in summaries {
        writeln!(out, "{}\t{}\t{:.3}", summary.book.name(), summary.verses, summary.mean)?;
    }
    Ok(())
}
