//! Category overview command.

use anyhow::{bail, Result};
use storefront_commerce::prelude::count_by_category;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(_args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let store = ctx.load_store().await;
    if let Some(message) = &store.error_message {
        bail!("Failed to load products: {}", message);
    }

    let counts = count_by_category(&store.products);

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Shop by category");
    let widths = [14, 14, 10];
    for entry in &counts {
        ctx.output.table_row(
            &[
                &entry.category.title(),
                &entry.category.path(),
                &format!("{} models", entry.count),
            ],
            &widths,
        );
    }

    Ok(())
}
