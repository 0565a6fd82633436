//! Corpus file loading.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use layered_taamim::Book;

use crate::dicta::{parse_dicta_json, DependencyParse};
use crate::errors::CorpusError;
use crate::rows::{parse_marker_rows, MarkerRow};

fn read(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|e| CorpusError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load a tab-separated marker table.
pub fn load_marker_rows(path: &Path) -> Result<Vec<MarkerRow>, CorpusError> {
    let rows = parse_marker_rows(&read(path)?)?;
    info!("loaded {} marker rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load one book's dependency parses.
pub fn load_dicta(path: &Path, book: Book) -> Result<Vec<DependencyParse>, CorpusError> {
    let parses = parse_dicta_json(book, &read(path)?)?;
    info!("loaded {} {} parses from {}", parses.len(), book.name(), path.display());
    Ok(parses)
}

/// Load every `<Book>_dicta.json` found in `dir`, books in canonical order.
/// Missing books are skipped.
pub fn load_dicta_dir(dir: &Path) -> Result<Vec<DependencyParse>, CorpusError> {
    let mut parses = Vec::new();
    for book in Book::ALL {
        let path = dir.join(format!("{}_dicta.json", book.name()));
        if !path.is_file() {
            debug!("load_dicta_dir: no parses for {}", book.name());
            continue;
        }
        parses.extend(load_dicta(&path, book)?);
    }
    Ok(parses)
}
