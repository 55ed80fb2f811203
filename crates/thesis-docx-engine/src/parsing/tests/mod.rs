//! Fixture tests for chapter parsing.
//!
//! Fixtures (.md) live in `fixtures/`; each is classified, checked against the
//! parsing invariants, and compared to an expected outline in compact form.

mod normalize;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::parsing::BlockClassifier;

fn read_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

fn assert_fixture(name: &str, expected: &[&str]) {
    let md = read_fixture(name);
    let classifier = BlockClassifier::new();
    let blocks = classifier.classify(&md);

    invariants::check(&classifier, &md, &blocks);
    assert_eq!(normalize::outline(&blocks), expected);
}

#[test]
fn fixture_chapter_outline() {
    assert_fixture(
        "chapter_outline",
        &[
            "H1 Chapter 1: Introduction",
            "H2 1.1 Background",
            "P This study examines **free will** in *artificial agents*.",
            "EM Research Question",
            "UL What grounds agency?",
            "UL How is it measured?",
            "OL 1. First aim",
            "OL 2. Second aim",
            "RAW | Term | Meaning |",
            "P |------|---------|",
            "H3 1.1.1 Scope",
            "P Closing remarks with an **unterminated bold**",
        ],
    );
}

#[test]
fn fixture_malformed_emphasis() {
    assert_fixture(
        "malformed_emphasis",
        &[
            "P *dangling italic*",
            "P text ",
            "EM ",
            "P a*b*c",
        ],
    );
}

#[test]
fn fixture_crlf_line_endings() {
    assert_fixture(
        "crlf",
        &["H1 Windows Heading", "P Body line", "UL item"],
    );
}

/// Empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(BlockClassifier::new().classify("").is_empty());
}

/// Blank lines and rules don't produce blocks.
#[test]
fn blank_lines_and_rules_only() {
    assert!(BlockClassifier::new().classify("\n\n---\n   \n").is_empty());
}

/// Fence lines are ordinary text to the classifier.
#[test]
fn unextracted_fences_become_paragraphs() {
    let blocks = BlockClassifier::new().classify("```yaml\nid: \"C1\"\n```");
    assert_eq!(
        normalize::outline(&blocks),
        vec!["P ```yaml", "P id: \"C1\"", "P ```"]
    );
}

fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        "#{1,4} [a-z]{0,8}",
        "[*]{0,4}[a-z ]{0,8}[*]{0,4}",
        "[-*] [a-z*]{0,8}",
        "[0-9]{1,2}\\. [a-z]{0,8}",
        "\\|[a-z |-]{0,10}\\|?",
        "\\[\\^[0-9]{1,2}\\]",
        "  ?[-]{3}  ?",
        Just("\r".to_string()),
    ]
}

proptest! {
    #[test]
    fn prop_arbitrary_documents_hold_invariants(
        lines in prop::collection::vec(arb_line(), 0..20)
    ) {
        let doc = lines.join("\n");
        for classifier in [BlockClassifier::new(), BlockClassifier::with_note_references()] {
            let blocks = classifier.classify(&doc);
            invariants::check(&classifier, &doc, &blocks);
        }
    }
}
