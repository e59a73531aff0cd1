//! ISO 4217 currency codes.
//!
//! Reports only carry the code; amount formatting belongs to the caller.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    #[default]
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Kenyan Shilling
    Kes,
    /// Nigerian Naira
    Ngn,
    /// Indonesian Rupiah
    Idr,
}

impl Currency {
    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Kes => "KES",
            Self::Ngn => "NGN",
            Self::Idr => "IDR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Currency::Usd, "USD")]
    #[case(Currency::Eur, "EUR")]
    #[case(Currency::Gbp, "GBP")]
    #[case(Currency::Kes, "KES")]
    #[case(Currency::Ngn, "NGN")]
    #[case(Currency::Idr, "IDR")]
    fn test_currency_code(#[case] currency: Currency, #[case] code: &str) {
        assert_eq!(currency.code(), code);
        assert_eq!(currency.to_string(), code);
        let parsed: Currency = serde_json::from_str(&format!("\"{code}\"")).unwrap();
        assert_eq!(parsed, currency);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        assert!(serde_json::from_str::<Currency>("\"XXX\"").is_err());
    }

    #[test]
    fn test_currency_serde() {
        assert_eq!(serde_json::to_string(&Currency::Kes).unwrap(), "\"KES\"");
        let parsed: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(parsed, Currency::Eur);
    }
}
