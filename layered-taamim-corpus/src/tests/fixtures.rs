use std::fs;
use std::path::{Path, PathBuf};

use layered_taamim::{Book, VerseKey};

use crate::{load_dicta, load_dicta_dir, load_marker_rows, CorpusError};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[test]
fn test_load_marker_rows() {
    let rows = load_marker_rows(&fixtures().join("markers.tsv")).unwrap();

    // the Joshua row is outside the corpus
    let keys: Vec<String> = rows.iter().map(|row| row.key.to_string()).collect();
    assert_eq!(keys, vec!["0:1:1", "0:1:2", "0:1:3", "1:1:1"]);
    assert_eq!(rows[0].codes, vec!["14", "65", "92"]);
    assert_eq!(rows[1].codes, vec!["01", "00", "65", "03", "14", "92"]);
}

#[test]
fn test_load_dicta_dir() {
    let parses = load_dicta_dir(&fixtures()).unwrap();

    let keys: Vec<VerseKey> = parses.iter().map(|parse| parse.key).collect();
    assert_eq!(
        keys,
        vec![
            VerseKey::new(Book::Genesis, 1, 1),
            VerseKey::new(Book::Genesis, 1, 2),
            VerseKey::new(Book::Genesis, 1, 4),
        ]
    );
    assert_eq!(parses[0].heads, vec![1, -1, 1]);
}

#[test]
fn test_load_dicta_dir_uses_file_names_for_books() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Exodus_dicta.json"),
        r#"[{"chapter": 2, "verse": 1, "prediction": [{"tokens": [{"syntax": {"dep_head_idx": -1}}]}]}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("notes.json"), "not json").unwrap();

    let parses = load_dicta_dir(dir.path()).unwrap();
    assert_eq!(parses.len(), 1);
    assert_eq!(parses[0].key, VerseKey::new(Book::Exodus, 2, 1));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.tsv");

    match load_marker_rows(&path) {
        Err(CorpusError::Load { path: reported, .. }) => {
            assert_eq!(reported, path.display().to_string())
        }
        other => panic!("expected a load error, got {:?}", other),
    }
    assert!(matches!(
        load_dicta(&path, Book::Genesis),
        Err(CorpusError::Load { .. })
    ));
}

#[test]
fn test_bad_row_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"Bgn1:1\t92\nno tab here\n").unwrap();

    let err = load_marker_rows(file.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error at line 2: expected <reference>\\t<markers>"
    );
}
