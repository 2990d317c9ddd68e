//! Corpus loading and text rendering, end to end

use stac_core::render::relocate_units;
use stac_core::{
    format_block, read_corpus, render_document, CorpusFilter, Document, Inserts, Rendering, Span,
    Unit,
};
use std::fs;
use tempfile::TempDir;

/// Two dialogues of two turns each, one EDU per turn
fn two_dialogue_doc() -> Document {
    let text = "bob: hi all alice: hey  bob: bye alice: later";
    let units = vec![
        Unit::new("d1", "Dialogue", Span::new(0, 23)),
        Unit::new("t1", "Turn", Span::new(0, 11)),
        Unit::new("e1", "Segment", Span::new(5, 11)),
        Unit::new("t2", "Turn", Span::new(12, 22)),
        Unit::new("e2", "Question", Span::new(19, 22)),
        Unit::new("d2", "Dialogue", Span::new(24, 45)),
        Unit::new("t3", "Turn", Span::new(24, 32)),
        Unit::new("e3", "Other", Span::new(29, 32)),
        Unit::new("t4", "Turn", Span::new(33, 45)),
        Unit::new("e4", "Accept", Span::new(40, 45)),
    ];
    Document::new(text, units)
}

#[test]
fn test_whole_document_rendering() {
    let doc = two_dialogue_doc();
    let rendering = render_document(&doc, false, &Inserts::default());

    assert_eq!(
        rendering,
        Rendering::Whole(
            "bob: {hi all} \nalice: {hey}  \n\n\nbob: {bye} \nalice: {later}".to_string()
        )
    );
}

#[test]
fn test_edge_rendering() {
    let doc = two_dialogue_doc();
    let rendering = render_document(&doc, true, &Inserts::default());

    assert_eq!(
        rendering,
        Rendering::Edges {
            leading: "bob: {hi all} \nalice: {hey}".to_string(),
            trailing: Some("bob: {bye} \nalice: {later}".to_string()),
        }
    );
}

#[test]
fn test_edge_rendering_leaves_corpus_units_untouched() {
    let doc = two_dialogue_doc();
    let before = doc.units.clone();

    let _ = render_document(&doc, true, &Inserts::default());
    let relocated = relocate_units(&doc.units, &Span::new(24, 45));

    assert_eq!(doc.units, before);
    assert_eq!(relocated.len(), 5);
    assert_eq!(relocated[0].span, Span::new(0, 21));
}

#[test]
fn test_corpus_dump_in_key_order() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let doc_json = serde_json::to_string(&two_dialogue_doc()).unwrap();
    let plain_json = r#"{"text": "  no dialogues here  ", "units": []}"#;

    fs::create_dir_all(root.join("s2/units/GOLD")).unwrap();
    fs::create_dir_all(root.join("s1/units/GOLD")).unwrap();
    fs::write(root.join("s2/units/GOLD/01.json"), plain_json).unwrap();
    fs::write(root.join("s1/units/GOLD/01.json"), &doc_json).unwrap();

    let corpus = read_corpus(root, &CorpusFilter::new(), |_| {}).unwrap();
    let inserts = Inserts::default();
    let output: String = corpus
        .iter()
        .map(|(key, doc)| format_block(key, &render_document(doc, true, &inserts)))
        .collect();

    assert_eq!(
        output,
        "========== s1 [01] units GOLD ============\n\n\
         bob: {hi all} \nalice: {hey}\n\
         ...\n\n\
         bob: {bye} \nalice: {later}\n\n\
         ========== s2 [01] units GOLD ============\n\n\
         no dialogues here\n\n"
    );
}

#[test]
fn test_unicode_document_offsets() {
    let doc = Document::new(
        "ça va? très bien",
        vec![
            Unit::new("d1", "Dialogue", Span::new(7, 16)),
            Unit::new("e1", "Segment", Span::new(7, 11)),
        ],
    );
    let rendering = render_document(&doc, true, &Inserts::default());
    assert_eq!(rendering.excerpts(), vec!["{très} bien"]);
}
