//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept at full precision through every computation; rounding to
//! two decimal places happens only when a price is rendered with
//! [`Price::display`].

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits shown when a price is rendered.
const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// The amount rounded half away from zero to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.rounded())
    }
}

/// `unit * quantity`, clamped to the range `Decimal` can represent.
#[must_use]
pub fn line_amount(unit: Decimal, quantity: u32) -> Decimal {
    unit.checked_mul(Decimal::from(quantity))
        .unwrap_or_else(|| saturated(unit))
}

/// Sum of `amounts`, clamped to the range `Decimal` can represent.
#[must_use]
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .unwrap_or_else(|| saturated(amount))
    })
}

/// The bound an overflowing operation with this operand's sign ran into.
fn saturated(operand: Decimal) -> Decimal {
    if operand.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Error returned when a currency code is not one of the supported ISO codes.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyCodeError(pub String);

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    INR,
}

impl CurrencyCode {
    /// Display symbol used as a price prefix.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::INR => "₹",
        }
    }

    /// Three-letter ISO code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
            Self::INR => "INR",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            "INR" => Ok(Self::INR),
            _ => Err(CurrencyCodeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        let price = Price::new(Decimal::new(5, 0), CurrencyCode::USD);
        assert_eq!(price.display(), "$5.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let price = Price::new(Decimal::new(10_005, 3), CurrencyCode::GBP);
        assert_eq!(price.display(), "£10.01");
    }

    #[test]
    fn test_rounding_does_not_touch_amount() {
        let price = Price::new(Decimal::new(1_999_9, 4), CurrencyCode::USD);
        assert_eq!(price.rounded(), Decimal::new(200, 2));
        assert_eq!(price.amount, Decimal::new(1_999_9, 4));
    }

    #[test]
    fn test_line_amount() {
        assert_eq!(line_amount(Decimal::new(2999, 2), 3), Decimal::new(8997, 2));
    }

    #[test]
    fn test_line_amount_saturates() {
        let half = Decimal::MAX / Decimal::TWO;
        assert_eq!(line_amount(half, 3), Decimal::MAX);
        assert_eq!(line_amount(-half, 3), Decimal::MIN);
    }

    #[test]
    fn test_saturating_sum() {
        let amounts = [Decimal::new(150, 2), Decimal::new(250, 2)];
        assert_eq!(saturating_sum(amounts), Decimal::new(400, 2));
        assert_eq!(saturating_sum([Decimal::MAX, Decimal::ONE]), Decimal::MAX);
        assert_eq!(saturating_sum(Vec::new()), Decimal::ZERO);
    }

    #[test]
    fn test_display_of_saturated_amount() {
        let price = Price::new(Decimal::MAX, CurrencyCode::USD);
        assert_eq!(price.display(), "$79228162514264337593543950335.00");
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" INR ".parse::<CurrencyCode>().unwrap(), CurrencyCode::INR);
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }
}
