// Unit tests for markdown formatter utilities and status maps

use binance_assistant::report::formatter::*;
use binance_assistant::report::status::*;

#[cfg(test)]
mod tests {
    use super::*;

    // Note: formatter.rs already includes basic tests
    // These tests cover additional edge cases:

    #[test]
    fn test_empty_table() {
        let headers = vec!["Column 1", "Column 2"];
        let rows: Vec<Vec<String>> = vec![];

        let table = build_table(&headers, &rows);

        assert!(table.contains("| Column 1 | Column 2 |"));
        assert!(table.contains("|--------|--------|"));

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_decimal_precision() {
        assert_eq!(format_quantity(0.1), "0.10000000");
        assert_eq!(format_price(0.1), "$0.10000000");
        assert_eq!(format_usd(1234.5), "$1234.50");
        assert_eq!(format_ratio(1.23456), "1.2346");
        assert_eq!(format_percentage(-2.346), "-2.35%");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(format_usd(-12.5), "$-12.50");
        assert_eq!(format_quantity(-0.25), "-0.25000000");
    }

    #[test]
    fn test_timestamps_are_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00:00");
        assert_eq!(format_timestamp(1_704_164_645_000), "2024-01-02 03:04:05");
        assert_eq!(format_short_time(1_704_164_645_000), "01-02 03:04");
    }

    #[test]
    fn test_field_and_bullet() {
        assert_eq!(field("Can Trade", check_mark(true)), "**Can Trade:** ✅\n");
        assert_eq!(bullet("Isolated", check_mark(false)), "- **Isolated:** ❌\n");
    }

    #[test]
    fn test_deposit_status_map() {
        assert_eq!(deposit_status(0), "⏳ Pending");
        assert_eq!(deposit_status(1), "✅ Success");
        assert_eq!(deposit_status(6), "⚠️ Credited");
        assert_eq!(deposit_status(7), "Status 7");
    }

    #[test]
    fn test_withdraw_status_map() {
        let expected = [
            "📧 Email Sent",
            "❌ Cancelled",
            "⏳ Awaiting Approval",
            "🚫 Rejected",
            "⚙️ Processing",
            "❌ Failure",
            "✅ Completed",
        ];
        for (code, label) in expected.iter().enumerate() {
            assert_eq!(withdraw_status(code as i64), *label);
        }
        assert_eq!(withdraw_status(-1), "Status -1");
    }
}
