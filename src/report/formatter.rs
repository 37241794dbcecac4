// Markdown formatting utilities shared by every tool

use chrono::{TimeZone, Utc};

/// Prices and quantities
pub const QUANTITY_DECIMALS: usize = 8;
/// Currency totals and percentages
pub const CURRENCY_DECIMALS: usize = 2;
/// Margin level and margin ratio
pub const RATIO_DECIMALS: usize = 4;

/// Build a markdown table from headers and rows
pub fn build_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = String::new();

    // Header row
    table.push_str("| ");
    table.push_str(&headers.join(" | "));
    table.push_str(" |\n");

    // Separator row
    table.push('|');
    for _ in headers {
        table.push_str("--------|");
    }
    table.push('\n');

    // Data rows
    for row in rows {
        table.push_str("| ");
        table.push_str(&row.join(" | "));
        table.push_str(" |\n");
    }

    table
}

/// Build a markdown list from items
pub fn build_list(items: &[String], ordered: bool) -> String {
    let mut list = String::new();

    for (i, item) in items.iter().enumerate() {
        if ordered {
            list.push_str(&format!("{}. {}\n", i + 1, item));
        } else {
            list.push_str(&format!("- {}\n", item));
        }
    }

    list
}

/// Build a markdown section header
pub fn build_section_header(title: &str, level: u8) -> String {
    let hashes = "#".repeat(level as usize);
    format!("{} {}\n\n", hashes, title)
}

/// `**Label:** value` line
pub fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("**{}:** {}\n", label, value)
}

/// `- **Label:** value` bullet
pub fn bullet(label: &str, value: impl std::fmt::Display) -> String {
    format!("- **{}:** {}\n", label, value)
}

/// Fixed-precision decimal without a currency sign
pub fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

/// Price or quantity at 8 decimals
///
/// 0.1 -> "0.10000000"
pub fn format_quantity(value: f64) -> String {
    format_decimal(value, QUANTITY_DECIMALS)
}

/// Dollar price at 8 decimals
pub fn format_price(value: f64) -> String {
    format_currency(value, QUANTITY_DECIMALS)
}

/// Dollar total at 2 decimals
///
/// 1234.5 -> "$1234.50"
pub fn format_usd(value: f64) -> String {
    format_currency(value, CURRENCY_DECIMALS)
}

/// Format a ratio (margin level, margin ratio) at 4 decimals
pub fn format_ratio(value: f64) -> String {
    format_decimal(value, RATIO_DECIMALS)
}

/// Format a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a currency value
pub fn format_currency(value: f64, decimals: usize) -> String {
    format!("${:.prec$}", value, prec = decimals)
}

/// ✅ / ❌ for boolean flags
pub fn check_mark(flag: bool) -> &'static str {
    if flag {
        "✅"
    } else {
        "❌"
    }
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS` (UTC)
pub fn format_timestamp(millis: i64) -> String {
    format_millis(millis, "%Y-%m-%d %H:%M:%S")
}

/// Compact `MM-DD HH:MM` (UTC) used in history tables
pub fn format_short_time(millis: i64) -> String {
    format_millis(millis, "%m-%d %H:%M")
}

fn format_millis(millis: i64, pattern: &str) -> String {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format(pattern).to_string(),
        _ => format!("{} ms (Unix epoch)", millis),
    }
}
