use crate::{segment_clauses, Book, Clause, ClauseListDisplay, ClauseRole, VerseKey};

fn codes(clauses: &[Clause]) -> Vec<Vec<&str>> {
    clauses.iter().map(|clause| clause.codes().collect()).collect()
}

#[test]
fn test_trailing_clause_is_kept() {
    let clauses = segment_clauses(&["01", "00", "65"]);

    assert_eq!(codes(&clauses), vec![vec!["01", "00"], vec!["65"]]);
    assert!(clauses[0].is_terminated());
    assert!(!clauses[1].is_terminated());
}

#[test]
fn test_lower_tiers_are_ignored() {
    // secondary and tertiary codes have no clause role
    let clauses = segment_clauses(&["14", "01", "10", "65", "92", "03", "00"]);

    assert_eq!(codes(&clauses), vec![vec!["01", "65", "92"], vec!["00"]]);
}

#[test]
fn test_lone_terminator_forms_a_clause() {
    let clauses = segment_clauses(&["00", "92"]);

    assert_eq!(codes(&clauses), vec![vec!["00"], vec!["92"]]);
    assert!(clauses.iter().all(Clause::is_terminated));
}

#[test]
fn test_no_clause_content() {
    assert!(segment_clauses(&["14", "-", "10"]).is_empty());
    assert!(segment_clauses::<&str>(&[]).is_empty());
}

#[test]
fn test_roles_are_recorded() {
    let clauses = segment_clauses(&["73", "92"]);

    let roles: Vec<ClauseRole> = clauses[0].markers().iter().map(|m| m.category).collect();
    assert_eq!(roles, vec![ClauseRole::Continuer, ClauseRole::Terminator]);
}

#[test]
fn test_clause_list_display() {
    let clauses = segment_clauses(&["01", "73", "00", "-", "65", "92", "80"]);
    let display = ClauseListDisplay::new(VerseKey::new(Book::Genesis, 1, 1), &clauses);

    insta::assert_snapshot!(display.to_string(), @r###"
    verse: 0:1:1:
      0. 01 73 00
      1. 65 92
      2. 80
    "###);
}

#[test]
fn test_clause_list_display_without_clauses() {
    let display = ClauseListDisplay::new(VerseKey::new(Book::Numbers, 7, 1), &[]);
    insta::assert_snapshot!(display.to_string(), @"verse: 3:7:1:");
}
