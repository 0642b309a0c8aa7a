// File: src/store.rs
//! Quote store: loads the structured quote collection and hands out a
//! random entry. The store is read fresh on every invocation and never
//! mutated or cached across runs.

use crate::context::AppContext;
use crate::model::Quote;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Quotes file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("No valid quotes found in {}", .0.display())]
    Empty(PathBuf),
    #[error("Failed to read quotes file")]
    Io(#[from] std::io::Error),
    #[error("Quotes file is not a valid JSON array of records")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Load the quote store for the given context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        Ok(Self::load_from_path(&ctx.quotes_path()?)?)
    }

    /// Load and normalize the store at `path`.
    ///
    /// Records lacking usable text under every synonym key are skipped
    /// silently; file order of the survivors is preserved.
    pub fn load_from_path(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&contents)?;

        let quotes: Vec<Quote> = records
            .iter()
            .filter_map(|v| v.as_object())
            .filter_map(Quote::from_record)
            .collect();

        if quotes.is_empty() {
            return Err(StoreError::Empty(path.to_path_buf()));
        }

        Ok(Self { quotes })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Pick one quote uniformly at random.
    ///
    /// The RNG is freshly seeded on each call; no reproducibility is
    /// offered. Callers hold a non-empty store by construction (the
    /// loader rejects empty stores), so an empty store here is a bug.
    pub fn pick(&self) -> &Quote {
        assert!(!self.quotes.is_empty(), "pick() on an empty quote store");
        let mut rng = fastrand::Rng::new();
        &self.quotes[rng.usize(..self.quotes.len())]
    }
}
