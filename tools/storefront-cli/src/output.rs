//! Output formatting for the CLI.
//!
//! Human output goes to stdout (status lines on stderr). With `--json` only
//! the JSON document is printed, and errors become `{"error": ...}` on stderr.

use console::{style, StyledObject};
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::prelude::Product;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.line(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are printed in both modes.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, title: &str) {
        if !self.json {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// Left-aligned columns padded to `widths`.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let cells: Vec<String> = cols
            .iter()
            .zip(widths)
            .map(|(col, &width)| format!("{:width$}", col))
            .collect();
        println!("  {}", cells.join("  ").trim_end());
    }

    /// Spinner on stderr; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(msg.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn line(&self, glyph: StyledObject<&str>, msg: &str) {
        if !self.json {
            println!("{} {}", glyph, msg);
        }
    }
}

/// Price column: the current price, followed by the struck full price when discounted.
pub fn price_label(product: &Product) -> String {
    if !product.is_discounted() {
        return product.price.display();
    }
    format!(
        "{} {}",
        style(product.price.display()).green(),
        style(product.full_price.display()).dim().strikethrough()
    )
}

/// Page selector line such as `‹ 1 [2] 3 ›`. Disabled arrows are dimmed.
pub fn page_selector(numbers: &[usize], current: usize, has_prev: bool, has_next: bool) -> String {
    let arrow = |glyph: &'static str, enabled: bool| {
        if enabled {
            glyph.to_string()
        } else {
            style(glyph).dim().to_string()
        }
    };

    let pages = numbers.iter().map(|&n| {
        if n == current {
            style(format!("[{}]", n)).bold().to_string()
        } else {
            n.to_string()
        }
    });

    std::iter::once(arrow("‹", has_prev))
        .chain(pages)
        .chain(std::iter::once(arrow("›", has_next)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_selector_marks_current() {
        console::set_colors_enabled(false);
        assert_eq!(page_selector(&[1, 2, 3], 2, true, true), "‹ 1 [2] 3 ›");
        assert_eq!(page_selector(&[1], 1, false, false), "‹ [1] ›");
    }
}
