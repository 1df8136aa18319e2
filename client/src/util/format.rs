//! Display formatting for amounts, dates, and status badges.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Rupee amount with Indian digit grouping and two decimals, e.g. `₹1,23,456.50`.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0.00".to_owned();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}₹{}.{fraction}", group_indian(whole))
}

/// `1234567` -> `12,34,567`: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        pairs.push(&head[start..end]);
        end = start;
    }
    pairs.reverse();
    format!("{},{tail}", pairs.join(","))
}

/// Badge color for a backend status string.
pub fn status_tone(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "approved" | "active" | "completed" | "resolved" => "green",
        "pending" | "in-progress" => "yellow",
        "rejected" | "suspended" | "failed" => "red",
        _ => "gray",
    }
}

/// RFC 3339 timestamp as `Mar 05, 2024, 10:30`. Unparsable input is returned as-is.
pub fn format_date(raw: &str) -> String {
    let format = format_description!("[month repr:short] [day], [year], [hour]:[minute]");
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_else(|| raw.to_owned())
}

/// Optional timestamp, with a dash when absent.
pub fn format_opt_date(raw: Option<&str>) -> String {
    raw.map_or_else(|| "-".to_owned(), format_date)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First and last four characters of a token, for display.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
