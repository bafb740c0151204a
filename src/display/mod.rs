//! Terminal display formatting
//!
//! All rounding and grouping happens here; the engine only ever hands over
//! raw numeric values.

pub mod report;
pub mod status;

pub use report::format_report;
pub use status::format_status;

/// Format an amount as rupees, rounded to whole units with Indian digit
/// grouping (12,34,567)
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(rounded.unsigned_abs()))
}

/// Indian grouping: last three digits, then groups of two
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Full month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(42.0), "₹42");
        assert_eq!(format_currency(999.0), "₹999");
    }

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(1000.0), "₹1,000");
        assert_eq!(format_currency(10000.0), "₹10,000");
        assert_eq!(format_currency(100000.0), "₹1,00,000");
        assert_eq!(format_currency(1234567.0), "₹12,34,567");
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn test_format_currency_rounds() {
        assert_eq!(format_currency(333.33), "₹333");
        assert_eq!(format_currency(1666.67), "₹1,667");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-1050.0), "-₹1,050");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(6), "June");
        assert_eq!(month_name(12), "December");
    }
}
