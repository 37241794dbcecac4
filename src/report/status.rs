// Fixed lookup tables for Binance numeric status codes

/// Deposit status from /sapi/v1/capital/deposit/hisrec
pub fn deposit_status(code: i64) -> String {
    let label = match code {
        0 => "⏳ Pending",
        1 => "✅ Success",
        6 => "⚠️ Credited",
        other => return format!("Status {}", other),
    };
    label.to_string()
}

/// Withdrawal status from /sapi/v1/capital/withdraw/history
pub fn withdraw_status(code: i64) -> String {
    let label = match code {
        0 => "📧 Email Sent",
        1 => "❌ Cancelled",
        2 => "⏳ Awaiting Approval",
        3 => "🚫 Rejected",
        4 => "⚙️ Processing",
        5 => "❌ Failure",
        6 => "✅ Completed",
        other => return format!("Status {}", other),
    };
    label.to_string()
}

/// Buyer/seller marker for trade tables
pub fn trade_side(is_buyer: bool) -> &'static str {
    if is_buyer {
        "🟢 BUY"
    } else {
        "🔴 SELL"
    }
}

/// Direction marker for futures positions
pub fn position_side(is_long: bool) -> &'static str {
    if is_long {
        "🟢 LONG"
    } else {
        "🔴 SHORT"
    }
}
