//! Replays search box input through the debounced committer.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_view::{CommitState, MemoryNavigator, Navigator, QueryCommitter};

use super::TypeArgs;
use crate::context::Context;

/// How often to check whether the scheduled commit has landed.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Serialize)]
struct TypeReport {
    url: String,
    echo: String,
    state: CommitState,
    url_writes: usize,
}

/// Run the type command.
pub async fn run(args: TypeArgs, ctx: &Context) -> Result<()> {
    let navigator = MemoryNavigator::new(&args.url);
    let mut search = QueryCommitter::new(Arc::new(navigator.clone()), &ctx.config.listing)
        .context("Failed to start the search box")?;
    let gap = Duration::from_millis(args.gap_ms);

    for (i, value) in args.keystrokes.iter().enumerate() {
        search.on_input(value);
        ctx.output.debug(&format!(
            "typed {:?}, url {}",
            value,
            navigator.location()
        ));
        if i + 1 < args.keystrokes.len() {
            tokio::time::sleep(gap).await;
        }
    }

    if args.clear {
        search.clear();
    }

    if search.is_pending() {
        let spinner = ctx.output.spinner("Waiting for typing to settle...");
        while search.is_pending() {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
        spinner.finish_and_clear();
    }

    let report = TypeReport {
        url: navigator.location().to_string(),
        echo: search.echo().to_string(),
        state: search.state(),
        url_writes: navigator.param_writes(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.success(&report.url);
    ctx.output.kv("search box", &format!("{:?}", report.echo));
    ctx.output.kv("url writes", &report.url_writes.to_string());

    Ok(())
}
