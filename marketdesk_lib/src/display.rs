//! Display formatting shared by the terminal views.

use marketdesk_api::types::Timestamp;

/// Formats a backend timestamp for display, branching on its wire form
/// (Unix seconds vs ISO string). Missing or unparseable values render as
/// "N/A".
pub fn format_timestamp(ts: Option<&Timestamp>) -> String {
    ts.and_then(Timestamp::to_datetime)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Formats an amount in the marketplace currency with thousands grouping.
pub fn format_price(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}AED {}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        frac
    )
}

/// Human label for a backend status code: underscores become spaces and
/// the first letter is capitalized ("in_transit" renders as "In transit").
/// Missing statuses render as "-".
pub fn status_label(status: Option<&str>) -> String {
    let status = match status {
        Some(s) if !s.is_empty() => s,
        _ => return "-".to_string(),
    };
    let spaced = status.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_seconds_format() {
        let ts = Timestamp::UnixSeconds(1714521600);
        assert_eq!(format_timestamp(Some(&ts)), "May 1, 2024");
    }

    #[test]
    fn iso_string_format() {
        let ts = Timestamp::Iso("2024-05-02T10:30:00Z".to_string());
        assert_eq!(format_timestamp(Some(&ts)), "May 2, 2024");
    }

    #[test]
    fn missing_timestamp_is_na() {
        assert_eq!(format_timestamp(None), "N/A");
        let bad = Timestamp::Iso("not a date".to_string());
        assert_eq!(format_timestamp(Some(&bad)), "N/A");
    }

    #[test]
    fn price_grouping() {
        assert_eq!(format_price(120.0), "AED 120.00");
        assert_eq!(format_price(1234.5), "AED 1,234.50");
        assert_eq!(format_price(154230.75), "AED 154,230.75");
        assert_eq!(format_price(-42.0), "-AED 42.00");
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(Some("pending")), "Pending");
        assert_eq!(status_label(Some("in_transit")), "In transit");
        assert_eq!(status_label(None), "-");
        assert_eq!(status_label(Some("")), "-");
    }
}
