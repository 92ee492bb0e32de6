use serde::{Deserialize, Serialize};

use crate::EngineError;

/// ISO currency code of an account.
///
/// Every user owns exactly one account per variant. Amounts are always stored
/// as an `i64` number of the smallest unit of the currency, so the engine never
/// deals with fractional values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    /// All supported currencies, in declaration order.
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rub];

    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Rub => "RUB",
        }
    }

    /// Position of the currency inside [`Currency::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> i64 {
        match self {
            Currency::Usd => 0,
            Currency::Eur => 1,
            Currency::Rub => 2,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "RUB" => Ok(Currency::Rub),
            other => Err(EngineError::InvalidInput(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Currency::try_from(" rub ").unwrap(), Currency::Rub);
        assert_eq!(Currency::try_from("Usd").unwrap(), Currency::Usd);
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(
            Currency::try_from("GBP").unwrap_err(),
            EngineError::InvalidInput("unsupported currency: GBP".to_string())
        );
    }

    #[test]
    fn ordinal_matches_all() {
        for (idx, currency) in Currency::ALL.iter().enumerate() {
            assert_eq!(currency.ordinal(), idx as i64);
            assert_eq!(Currency::try_from(currency.code()).unwrap(), *currency);
        }
    }
}
