use super::*;

// =============================================================
// format_amount
// =============================================================

#[test]
fn amount_uses_indian_grouping() {
    assert_eq!(format_amount(123_456.5), "₹1,23,456.50");
    assert_eq!(format_amount(1_234_567.0), "₹12,34,567.00");
    assert_eq!(format_amount(12_345_678.9), "₹1,23,45,678.90");
}

#[test]
fn amount_small_and_negative() {
    assert_eq!(format_amount(0.0), "₹0.00");
    assert_eq!(format_amount(999.999), "₹1,000.00");
    assert_eq!(format_amount(49.0), "₹49.00");
    assert_eq!(format_amount(-1500.0), "-₹1,500.00");
    assert_eq!(format_amount(f64::NAN), "₹0.00");
}

// =============================================================
// status_tone
// =============================================================

#[test]
fn status_tone_maps_known_statuses() {
    assert_eq!(status_tone("approved"), "green");
    assert_eq!(status_tone("Resolved"), "green");
    assert_eq!(status_tone("pending"), "yellow");
    assert_eq!(status_tone("in-progress"), "yellow");
    assert_eq!(status_tone("suspended"), "red");
    assert_eq!(status_tone("draft"), "gray");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn date_formats_rfc3339() {
    assert_eq!(format_date("2024-03-05T10:30:00Z"), "Mar 05, 2024, 10:30");
    assert_eq!(format_date("2024-12-25T08:05:59.123Z"), "Dec 25, 2024, 08:05");
}

#[test]
fn date_passes_through_garbage() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_opt_date(None), "-");
}

// =============================================================
// Text
// =============================================================

#[test]
fn capitalize_first_char() {
    assert_eq!(capitalize("pending"), "Pending");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("éclair"), "Éclair");
}

#[test]
fn mask_token_hides_middle() {
    assert_eq!(mask_token("abcdefghijkl"), "abcd…ijkl");
    assert_eq!(mask_token("short"), "*****");
}
