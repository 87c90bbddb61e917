//! Project-specific utilities live here.

use rust_decimal::Decimal;

/// Formats an amount with its currency symbol, dropping trailing zeros.
pub fn format_price(currency_symbol: &str, amount: Decimal) -> String {
    format!("{}{}", currency_symbol, amount.normalize())
}

/// True for strings with no visible characters.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn price_drops_trailing_zeros() {
        let amount = Decimal::from_str("4500.00").unwrap();
        assert_eq!(format_price("₹", amount), "₹4500");
    }

    #[test]
    fn price_keeps_fraction() {
        let amount = Decimal::from_str("4500.50").unwrap();
        assert_eq!(format_price("₹", amount), "₹4500.5");
    }

    #[test]
    fn whitespace_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" DEL "));
    }
}
