use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use taproot::model::{FieldEdit, Forest, NodeId};
use taproot::ops::{add_child, add_root, add_sibling, check_forest, move_node, update_fields};
use taproot::parse::{parse_forest, serialize_forest};

/// Flatten a forest to (depth, title, status, description, notes) rows in
/// display order — everything that must survive a round trip except the
/// ids, which are free to differ.
fn flatten(forest: &Forest) -> Vec<(usize, String, String, String, String)> {
    fn walk(
        forest: &Forest,
        id: NodeId,
        depth: usize,
        out: &mut Vec<(usize, String, String, String, String)>,
    ) {
        let node = forest.get(id).expect("listed id exists");
        out.push((
            depth,
            node.title.clone(),
            node.status.clone(),
            node.description.clone(),
            node.notes.clone(),
        ));
        for &child in &node.children {
            walk(forest, child, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    for &root in forest.roots() {
        walk(forest, root, 0, &mut out);
    }
    out
}

/// Helper: load a fixture, parse it, and assert the serialized form parses
/// back to the same tree and is itself stable (the canonical form is a
/// fixpoint).
fn assert_fixture_round_trip(fixture_name: &str) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture_name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("could not read fixture {}: {}", fixture_name, e));

    let forest = parse_forest(&source)
        .unwrap_or_else(|e| panic!("fixture {} failed to parse: {}", fixture_name, e));
    assert_eq!(check_forest(&forest), vec![], "fixture: {}", fixture_name);

    let canonical = serialize_forest(&forest).unwrap();
    let reparsed = parse_forest(&canonical).unwrap();
    assert_eq!(
        flatten(&reparsed),
        flatten(&forest),
        "round-trip changed fixture: {}",
        fixture_name
    );
    assert_eq!(
        serialize_forest(&reparsed).unwrap(),
        canonical,
        "canonical form not stable for fixture: {}",
        fixture_name
    );
}

// ============================================================================
// Fixture round-trips
// ============================================================================

#[test]
fn round_trip_portfolio() {
    assert_fixture_round_trip("portfolio.yaml");
}

#[test]
fn round_trip_legacy_ids() {
    assert_fixture_round_trip("legacy_ids.yaml");
}

#[test]
fn round_trip_minimal() {
    assert_fixture_round_trip("minimal.yaml");
}

#[test]
fn portfolio_fixture_has_expected_shape() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolio.yaml");
    let forest = parse_forest(&fs::read_to_string(path).unwrap()).unwrap();

    assert_eq!(forest.roots().len(), 2);
    let rows = flatten(&forest);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].1, "Dissertation");
    assert_eq!(rows[0].0, 0);
    assert_eq!(rows[3].1, "Dataset curation");
    assert_eq!(rows[3].0, 2);
    // Block-scalar notes keep their inner newline
    assert!(rows[2].4.contains("blocked on cluster quota\n"));
}

// ============================================================================
// Round-trip law on forests built through the ops
// ============================================================================

#[test]
fn built_forest_round_trips_isomorphically() {
    let mut forest = Forest::new();
    let thesis = add_root(&mut forest, None).unwrap();
    update_fields(
        &mut forest,
        thesis,
        FieldEdit::default()
            .title("Thesis")
            .status("In-Progress")
            .description("multi\nline\ndescription")
            .notes("notes with trailing newline\n"),
    )
    .unwrap();
    let review = add_child(&mut forest, thesis).unwrap();
    update_fields(&mut forest, review, FieldEdit::default().title("Review")).unwrap();
    let bench = add_sibling(&mut forest, review).unwrap();
    update_fields(
        &mut forest,
        bench,
        FieldEdit::default().title("Bench: solvers, n=3").status("odd status, unvalidated"),
    )
    .unwrap();
    let side = add_root(&mut forest, Some(thesis)).unwrap();
    update_fields(&mut forest, side, FieldEdit::default().title("Side")).unwrap();
    move_node(&mut forest, bench, Some(side), 0).unwrap();

    let text = serialize_forest(&forest).unwrap();
    let reloaded = parse_forest(&text).unwrap();

    assert_eq!(flatten(&reloaded), flatten(&forest));
    assert_eq!(check_forest(&reloaded), vec![]);
    assert_eq!(reloaded.roots().len(), forest.roots().len());
    assert_eq!(reloaded.len(), forest.len());
}

#[test]
fn empty_forest_round_trips() {
    let text = serialize_forest(&Forest::new()).unwrap();
    let reloaded = parse_forest(&text).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn yaml_looking_field_text_stays_opaque() {
    // Field content that resembles YAML syntax must come back verbatim
    let mut forest = Forest::new();
    let a = add_root(&mut forest, None).unwrap();
    update_fields(
        &mut forest,
        a,
        FieldEdit::default()
            .title("- name: not a child")
            .status("children: []")
            .notes("key: value\n- list item\n# comment"),
    )
    .unwrap();

    let reloaded = parse_forest(&serialize_forest(&forest).unwrap()).unwrap();
    assert_eq!(reloaded.len(), 1);
    let node = reloaded.get(reloaded.roots()[0]).unwrap();
    assert_eq!(node.title, "- name: not a child");
    assert_eq!(node.status, "children: []");
    assert_eq!(node.notes, "key: value\n- list item\n# comment");
}
