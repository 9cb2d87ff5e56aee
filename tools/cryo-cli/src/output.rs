//! Output formatting for the CLI.

use console::style;
use cryo_commerce::checkout::OrderStatus;
use cryo_commerce::ValidationErrors;
use indicatif::{ProgressBar, ProgressStyle};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print each failed field on its own line.
    pub fn validation_errors(&self, errors: &ValidationErrors) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": "validation failed", "fields": errors }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style("Please fix the following:").red());
        for e in errors.iter() {
            eprintln!("  {} {}", style(&e.field).yellow(), e.message);
        }
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| pad(col, *width))
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Left-align to `width` columns, measured without ANSI styling.
fn pad(col: &str, width: usize) -> String {
    let visible = console::measure_text_width(col);
    format!("{col}{}", " ".repeat(width.saturating_sub(visible)))
}

/// Colored order status.
pub fn status_badge(status: OrderStatus) -> String {
    let label = status.as_str();
    match status {
        OrderStatus::Pending => style(label).yellow().to_string(),
        OrderStatus::Processing => style(label).blue().to_string(),
        OrderStatus::Shipped => style(label).magenta().to_string(),
        OrderStatus::Delivered => style(label).green().to_string(),
        OrderStatus::Cancelled => style(label).dim().to_string(),
    }
}

/// Stock column text.
pub fn stock_badge(in_stock: bool, quantity: u32) -> String {
    if in_stock {
        style(format!("{quantity} in stock")).green().to_string()
    } else {
        style("out of stock").red().to_string()
    }
}

/// Shorten to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
