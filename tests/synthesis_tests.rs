//! Record-to-entry synthesis integration tests
//!
//! Full pipeline: raw response JSON through envelope checking, field
//! normalization, cite key generation, and serialization.

use bibsynth_core::{
    synthesize, synthesize_work, CrossrefWork, FieldNameCase, ProtectMode, Record, SynthesisError,
    SynthesisOptions,
};

fn article_response() -> &'static str {
    r#"{
        "status": "ok",
        "message": {
            "type": "journal-article",
            "author": [
                {"family": "Sørensen", "given": "Anders S."},
                {"family": "Mølmer", "given": "Klaus"}
            ],
            "title": ["Atomic Schrödinger cat states"],
            "short-container-title": ["Phys. Rev. A"],
            "container-title": ["Physical Review A"],
            "issued": {"date-parts": [[2018, 4]]},
            "DOI": "10.1103/physreva.97.043802",
            "volume": "97",
            "issue": "4",
            "page": "123-130",
            "reference": [{"DOI": "10.1103/physrevlett.82.1835"}]
        }
    }"#
}

#[test]
fn test_article_synthesis_end_to_end() {
    let record = Record::from_lookup_response(article_response()).unwrap();
    let entry = synthesize(&record, &SynthesisOptions::new()).unwrap();
    assert_eq!(
        entry.to_bibtex(FieldNameCase::Capitalized),
        "@article{SorensenPRA2018,\n\
         \x20   Author = {Sørensen, Anders S. and Mølmer, Klaus},\n\
         \x20   Title = {Atomic {Schrödinger} cat states},\n\
         \x20   Journal = pra,\n\
         \x20   Year = {2018},\n\
         \x20   Doi = {10.1103/physreva.97.043802},\n\
         \x20   Pages = {123},\n\
         \x20   Volume = {97},\n\
         \x20   Number = {4},\n\
         }"
    );
}

#[test]
fn test_article_lowercase_field_names() {
    let record = Record::from_lookup_response(article_response()).unwrap();
    let entry = synthesize(&record, &SynthesisOptions::new()).unwrap();
    let rendered = entry.to_bibtex(FieldNameCase::Lowercase);
    assert!(rendered.contains("    author = {Sørensen, Anders S. and Mølmer, Klaus},"));
    assert!(rendered.contains("    doi = {10.1103/physreva.97.043802},"));
    assert_eq!(rendered.lines().last(), Some("}"));
}

#[test]
fn test_proceedings_synthesis() {
    let work: CrossrefWork = serde_json::from_str(
        r#"{
            "type": "proceedings-article",
            "author": [{"family": "Glaser", "given": "Steffen"}],
            "editor": [{"family": "Wilson", "given": "Rachel"}],
            "title": ["Optimal control of coupled spin dynamics"],
            "container-title": ["Proc. Int. Conf. Quantum Control"],
            "issued": {"date-parts": [[2015]]},
            "DOI": "10.1000/spin.2015",
            "page": "55–63",
            "event": {"location": "Vienna, Austria"}
        }"#,
    )
    .unwrap();
    let entry = synthesize_work(&work, &SynthesisOptions::new()).unwrap();
    assert_eq!(entry.cite_key, "GlaserPICQC2015");
    assert_eq!(
        entry.to_bibtex(FieldNameCase::Capitalized),
        "@inproceedings{GlaserPICQC2015,\n\
         \x20   Author = {Glaser, Steffen},\n\
         \x20   Title = {Optimal control of coupled spin dynamics},\n\
         \x20   Booktitle = {Proc. Int. Conf. Quantum Control},\n\
         \x20   Year = {2015},\n\
         \x20   Doi = {10.1000/spin.2015},\n\
         \x20   Pages = {55--63},\n\
         \x20   Address = {Vienna, Austria},\n\
         \x20   Editor = {Wilson, Rachel},\n\
         }"
    );
}

#[test]
fn test_book_chapter_synthesis() {
    let work: CrossrefWork = serde_json::from_str(
        r#"{
            "type": "book-chapter",
            "author": [{"family": "Koch", "given": "Christiane"}],
            "editor": [{"family": "Tannor", "given": "David"}],
            "title": ["Controlling open quantum systems"],
            "container-title": ["Advances in Chemical Physics"],
            "issued": {"date-parts": [[2019]]},
            "DOI": "10.1000/chapter.7",
            "page": "123-130",
            "publisher": "Wiley",
            "volume": "163"
        }"#,
    )
    .unwrap();
    let entry = synthesize_work(&work, &SynthesisOptions::new()).unwrap();
    // No journal initials for book chapters
    assert_eq!(entry.cite_key, "Koch2019");
    let names: Vec<&str> = entry.fields().iter().map(|(n, _)| *n).collect();
    assert_eq!(
        names,
        vec!["author", "title", "booktitle", "year", "doi", "pages", "editor", "publisher", "volume"]
    );
    let rendered = entry.to_bibtex(FieldNameCase::Capitalized);
    // Book chapters keep the normalized page range
    assert!(rendered.contains("    Pages = {123--130},"));
}

#[test]
fn test_unsupported_type_carries_tag() {
    let response = r#"{"status": "ok", "message": {"type": "monograph"}}"#;
    let record = Record::from_lookup_response(response).unwrap();
    let err = synthesize(&record, &SynthesisOptions::new()).unwrap_err();
    assert_eq!(
        err,
        SynthesisError::UnsupportedType {
            record_type: "monograph".to_string()
        }
    );
    assert!(err.to_string().contains("monograph"));
}

#[test]
fn test_malformed_envelope() {
    for body in [
        r#"[1, 2, 3]"#,
        r#"{"status": "error", "message": {}}"#,
        r#"{"no-status": true}"#,
        "not json at all",
    ] {
        assert!(matches!(
            Record::from_lookup_response(body),
            Err(SynthesisError::MalformedResponse { .. })
        ));
    }
}

#[test]
fn test_query_response_takes_first_item() {
    let response = r#"{
        "status": "ok",
        "message": {
            "items": [
                {
                    "type": "journal-article",
                    "author": [{"family": "Imamoğlu", "given": "Atac"}],
                    "title": ["Quantum information processing"],
                    "short-container-title": ["Phys. Rev. Lett."],
                    "issued": {"date-parts": [[1999]]}
                },
                {"type": "journal-article"}
            ]
        }
    }"#;
    let record = Record::from_query_response(response).unwrap();
    let entry = synthesize(&record, &SynthesisOptions::new()).unwrap();
    assert_eq!(entry.cite_key, "ImamogluPRL1999");
}

#[test]
fn test_unknown_journal_stays_literal() {
    let work: CrossrefWork = serde_json::from_str(
        r#"{
            "type": "journal-article",
            "title": ["Results"],
            "container-title": ["Journal of Negative Results"]
        }"#,
    )
    .unwrap();
    let entry = synthesize_work(&work, &SynthesisOptions::new()).unwrap();
    let rendered = entry.to_bibtex(FieldNameCase::Capitalized);
    assert!(rendered.contains("    Journal = {Journal of Negative Results},"));
}

#[test]
fn test_fix_uppercase_record() {
    let work: CrossrefWork = serde_json::from_str(
        r#"{
            "type": "journal-article",
            "author": [{"family": "SORENSEN", "given": "ANDERS"}],
            "title": ["ATOMIC CAT STATES IN QUANTUM OPTICS"],
            "short-container-title": ["Phys. Rev. A"],
            "issued": {"date-parts": [[2018]]}
        }"#,
    )
    .unwrap();
    let opts = SynthesisOptions {
        fix_uppercase: true,
        protect_mode: ProtectMode::Always,
        ..SynthesisOptions::new()
    };
    let entry = synthesize_work(&work, &opts).unwrap();
    assert_eq!(entry.cite_key, "SorensenPRA2018");
    let rendered = entry.to_bibtex(FieldNameCase::Capitalized);
    assert!(rendered.contains("    Author = {Sorensen, Anders},"));
    assert!(rendered.contains("    Title = {Atomic cat states in quantum optics},"));
}
