// Currency formatting for price badges and the footer

use crate::models::settings::CurrencySettings;

pub trait CurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String;
}

/// Shopper-facing amount: symbol prefix and fixed decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopperCurrency {
    symbol: String,
    decimal_places: usize,
}

impl ShopperCurrency {
    pub fn new(symbol: impl Into<String>, decimal_places: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimal_places: decimal_places as usize,
        }
    }
}

impl Default for ShopperCurrency {
    fn default() -> Self {
        Self::new("$", 2)
    }
}

impl From<&CurrencySettings> for ShopperCurrency {
    fn from(settings: &CurrencySettings) -> Self {
        Self::new(settings.symbol.clone(), settings.decimal_places)
    }
}

impl CurrencyFormatter for ShopperCurrency {
    fn format_amount(&self, amount: f64) -> String {
        let digits = format!("{:.*}", self.decimal_places, amount.abs());
        // Amounts that round to zero carry no sign.
        let negative = amount < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let sign = if negative { "-" } else { "" };
        format!("{sign}{}{digits}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(10.0, "$10.00")]
    #[test_case(4.956, "$4.96" ; "rounds to precision")]
    #[test_case(0.0, "$0.00")]
    #[test_case(-1.0, "-$1.00")]
    #[test_case(-0.001, "$0.00" ; "negative rounding to zero is unsigned")]
    #[test_case(-0.005001, "-$0.01" ; "negative rounding away from zero keeps sign")]
    fn test_default_formatting(amount: f64, expected: &str) {
        assert_eq!(ShopperCurrency::default().format_amount(amount), expected);
    }

    #[test]
    fn test_custom_symbol_and_precision() {
        let currency = ShopperCurrency::new("€", 0);
        assert_eq!(currency.format_amount(12.4), "€12");
    }

    #[test]
    fn test_from_settings() {
        let settings = CurrencySettings {
            symbol: "£".to_string(),
            decimal_places: 3,
        };
        assert_eq!(ShopperCurrency::from(&settings).format_amount(1.5), "£1.500");
    }
}
