/// Placeholder printed for values that could not be computed.
pub const MISSING: &str = "N/A";

/// Two-decimal price, or `N/A` when absent.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{:.2}", p),
        None => MISSING.to_string(),
    }
}

/// Comma-separated two-decimal prices, or `N/A` for an empty list.
pub fn format_levels(levels: &[f64]) -> String {
    if levels.is_empty() {
        return MISSING.to_string();
    }
    levels
        .iter()
        .map(|&p| format_price(Some(p)))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_use_two_decimals() {
        assert_eq!(format_price(Some(95123.5)), "95123.50");
        assert_eq!(format_price(Some(0.001)), "0.00");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn level_lists() {
        assert_eq!(format_levels(&[1.0, 2.5]), "1.00, 2.50");
        assert_eq!(format_levels(&[]), "N/A");
    }
}
