// File: src/controller.rs
//! Central sequencing logic for the show-now pipeline.
//! All entry points (the CLI and the scheduled task it installs)
//! delegate here so that the load → pick → notify → log order is
//! identical no matter how the program was invoked.

use crate::config::Config;
use crate::context::AppContext;
use crate::journal::UsageJournal;
use crate::notify::Notifier;
use crate::store::QuoteStore;
use anyhow::Result;

/// Show one quote now with the standard notification chain.
///
/// Returns the process exit code: 0 if any backend delivered, 1 if the
/// whole chain failed. Store errors (missing file, no usable quotes)
/// are fatal and propagate.
pub fn show_now(ctx: &dyn AppContext) -> Result<i32> {
    show_now_with(ctx, &Notifier::new())
}

/// Show one quote now through an explicit notifier chain.
pub fn show_now_with(ctx: &dyn AppContext, notifier: &Notifier) -> Result<i32> {
    let config = Config::load(ctx);
    let store = QuoteStore::load(ctx)?;
    let quote = store.pick();

    let shown = notifier.deliver(&config.title, &quote.body(), config.timeout_secs);
    if !shown {
        log::warn!("every notification backend failed; quote recorded in the log only");
    }

    // The journal tracks selections, not deliveries: append regardless.
    UsageJournal::append(ctx, quote)?;

    Ok(if shown { 0 } else { 1 })
}
