//! Number formatting utilities for table cells.

/// Formats a price with a leading currency symbol and exactly two decimal
/// places.
///
/// # Examples
///
/// ```
/// let formatted = frontend::shared::number_format::format_price(1.5);
/// assert_eq!(formatted, "$1.50");
/// ```
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1.5), "$1.50");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(2.0), "$2.00");
        assert_eq!(format_price(10.999), "$11.00");
        assert_eq!(format_price(1234.56), "$1234.56");
    }
}
