// File: tests/store_loading.rs
use quotidie::context::{AppContext, TestContext};
use quotidie::model::UNKNOWN_AUTHOR;
use quotidie::store::{QuoteStore, StoreError};
use std::collections::HashSet;
use std::fs;

fn write_store(ctx: &TestContext, json: &str) {
    fs::write(ctx.quotes_path().unwrap(), json).unwrap();
}

#[test]
fn loads_valid_store_preserving_order() {
    let ctx = TestContext::new();
    write_store(
        &ctx,
        r#"[
            {"text": "First.", "author": "A"},
            {"text": "Second.", "author": "B"},
            {"text": "Third.", "author": "C"}
        ]"#,
    );

    let store = QuoteStore::load(&ctx).unwrap();
    assert_eq!(store.len(), 3);
    let texts: Vec<&str> = store.quotes().iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, ["First.", "Second.", "Third."]);
}

#[test]
fn synonym_keys_are_accepted() {
    let ctx = TestContext::new();
    write_store(
        &ctx,
        r#"[
            {"quote": "Via quote key.", "a": "Short Author"},
            {"q": "Via q key."}
        ]"#,
    );

    let store = QuoteStore::load(&ctx).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.quotes()[0].text, "Via quote key.");
    assert_eq!(store.quotes()[0].author, "Short Author");
    assert_eq!(store.quotes()[1].author, UNKNOWN_AUTHOR);
}

#[test]
fn records_without_usable_text_are_skipped() {
    let ctx = TestContext::new();
    write_store(
        &ctx,
        r#"[
            {"author": "No Text"},
            {"text": "   "},
            {"text": 42, "author": "Numeric"},
            {"text": "Kept.", "author": "K"}
        ]"#,
    );

    let store = QuoteStore::load(&ctx).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.quotes()[0].text, "Kept.");
}

#[test]
fn values_are_trimmed_on_load() {
    let ctx = TestContext::new();
    write_store(&ctx, r#"[{"text": "  padded  ", "author": "  P  "}]"#);

    let store = QuoteStore::load(&ctx).unwrap();
    assert_eq!(store.quotes()[0].text, "padded");
    assert_eq!(store.quotes()[0].author, "P");
}

#[test]
fn missing_file_is_not_found() {
    let ctx = TestContext::new();
    let err = QuoteStore::load_from_path(&ctx.quotes_path().unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn store_with_no_usable_records_is_empty_error() {
    let ctx = TestContext::new();

    write_store(&ctx, "[]");
    let err = QuoteStore::load_from_path(&ctx.quotes_path().unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::Empty(_)));

    write_store(&ctx, r#"[{"author": "Only Attribution"}]"#);
    let err = QuoteStore::load_from_path(&ctx.quotes_path().unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::Empty(_)));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let ctx = TestContext::new();
    write_store(&ctx, "{ not json");
    let err = QuoteStore::load_from_path(&ctx.quotes_path().unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::Parse(_)));
}

#[test]
fn error_kind_survives_the_anyhow_boundary() {
    // The dispatcher reports store errors through anyhow; the concrete
    // kind must remain downcastable for callers that care.
    let ctx = TestContext::new();
    let err = QuoteStore::load(&ctx).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::NotFound(_))
    ));
}

#[test]
fn picks_cover_the_whole_store() {
    let ctx = TestContext::new();
    write_store(
        &ctx,
        r#"[
            {"text": "One.", "author": "A"},
            {"text": "Two.", "author": "B"},
            {"text": "Three.", "author": "C"}
        ]"#,
    );
    let store = QuoteStore::load(&ctx).unwrap();

    let mut seen = HashSet::new();
    for _ in 0..400 {
        let picked = store.pick();
        // Never something outside the store.
        assert!(store.quotes().contains(picked));
        seen.insert(picked.text.clone());
    }
    // With 400 uniform draws over 3 entries, missing one is ~1e-50.
    assert_eq!(seen.len(), store.len());
}
