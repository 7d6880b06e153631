//! Listing page command.

use anyhow::{bail, Result};
use storefront_commerce::prelude::Product;
use storefront_view::{ListingHeader, ListingState, Location, QUERY_PARAM};

use super::ListArgs;
use crate::context::Context;
use crate::output::{page_selector, price_label};

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let store = ctx.load_store().await;
    let location = Location::parse(&args.url);
    // No typing happens here, so the search box shows the committed query.
    let search_input = location.params.get(QUERY_PARAM).unwrap_or_default();

    let state = ListingState::derive(&store, &location, search_input);

    if ctx.output.is_json() {
        ctx.output.json(&state);
        return Ok(());
    }

    match state {
        ListingState::Loading => ctx.output.info("Loading products..."),
        ListingState::Failed { message } => {
            bail!("Something went wrong: {}. Run the command again to retry.", message)
        }
        ListingState::Empty { message } => {
            ctx.output.header(location.category_token());
            ctx.output.info(&message);
        }
        ListingState::NoMatches { header, message } => {
            print_header(ctx, &header);
            ctx.output.info(&message);
        }
        ListingState::Ready {
            header,
            products,
            pagination,
            show_pagination,
        } => {
            print_header(ctx, &header);
            println!();
            print_products(ctx, &products);

            if show_pagination {
                let numbers = pagination.page_numbers(ctx.config.listing.page_window);
                println!();
                println!(
                    "  {}",
                    page_selector(
                        &numbers,
                        pagination.page,
                        pagination.has_prev,
                        pagination.has_next
                    )
                );
            }
        }
    }

    Ok(())
}

fn print_header(ctx: &Context, header: &ListingHeader) {
    let trail: Vec<&str> = std::iter::once("Home")
        .chain(header.breadcrumbs.iter().map(|c| c.label.as_str()))
        .collect();
    ctx.output.info(&trail.join(" › "));
    ctx.output.header(&header.title);
    ctx.output.kv("models", &header.models_count.to_string());
    ctx.output.kv("sort by", header.params.sort.display_name());
    ctx.output.kv("items on page", header.params.per_page.as_str());
    if !header.params.query.is_empty() {
        ctx.output.kv("search", &header.params.query);
    }
}

fn print_products(ctx: &Context, products: &[&Product]) {
    let name_width = products
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);
    let widths = [name_width, 6, 12];

    for product in products {
        ctx.output.table_row(
            &[
                &product.name,
                &product.year.to_string(),
                &price_label(product),
            ],
            &widths,
        );
    }
}
