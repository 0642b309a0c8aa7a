// File: tests/journal_behavior.rs
use chrono::NaiveDateTime;
use quotidie::context::{AppContext, TestContext};
use quotidie::journal::{LOG_HEADER, TIMESTAMP_FORMAT, UsageJournal};
use quotidie::model::Quote;

fn quote(text: &str, author: &str) -> Quote {
    Quote {
        text: text.to_string(),
        author: author.to_string(),
    }
}

fn read_rows(ctx: &TestContext) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(ctx.log_file_path().unwrap())
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn first_append_creates_log_with_header() {
    let ctx = TestContext::new();
    assert!(!ctx.log_file_path().unwrap().exists());

    UsageJournal::append(&ctx, &quote("Be bold.", "X")).unwrap();

    let rows = read_rows(&ctx);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], LOG_HEADER);
    assert_eq!(rows[1][1], "Be bold.");
    assert_eq!(rows[1][2], "X");
}

#[test]
fn n_appends_yield_n_plus_one_rows() {
    let ctx = TestContext::new();

    for i in 0..5 {
        UsageJournal::append(&ctx, &quote(&format!("Quote {}", i), "Author")).unwrap();
    }

    let rows = read_rows(&ctx);
    assert_eq!(rows.len(), 6);
    // Header only once, rows in append order, fields verbatim.
    assert_eq!(rows[0], LOG_HEADER);
    for (i, row) in rows[1..].iter().enumerate() {
        assert_eq!(row[1], format!("Quote {}", i));
        assert_eq!(row[2], "Author");
    }
}

#[test]
fn quoting_round_trips_commas_and_newlines() {
    let ctx = TestContext::new();
    let tricky = quote("Ask, and it shall be\ngiven.", "Anonymous, really");

    UsageJournal::append(&ctx, &tricky).unwrap();

    let rows = read_rows(&ctx);
    assert_eq!(rows[1][1], tricky.text);
    assert_eq!(rows[1][2], tricky.author);
}

#[test]
fn timestamps_are_iso8601_at_second_precision() {
    let ctx = TestContext::new();
    UsageJournal::append(&ctx, &quote("Timely.", "T")).unwrap();

    let rows = read_rows(&ctx);
    let stamp = &rows[1][0];
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .unwrap_or_else(|e| panic!("bad timestamp '{}': {}", stamp, e));
}
