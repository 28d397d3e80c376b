// File: sustainer-core/src/status/pricing.rs

use std::fmt;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::CurrencyCode;

/// Currencies whose smallest unit is a whole unit, so stored amounts are
/// already display amounts.
pub const ZERO_DECIMAL_CURRENCY_CODES: &[&str] = &[
    "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA",
    "PYG", "RWF", "UGX", "VND", "VUV", "XAF", "XOF", "XPF",
];

pub fn is_zero_decimal_currency(currency: &CurrencyCode) -> bool {
    ZERO_DECIMAL_CURRENCY_CODES.contains(&currency.as_str())
}

/// Converts an amount stored in the smallest currency unit to a display amount.
pub fn display_amount(stored: Decimal, currency: &CurrencyCode) -> Decimal {
    if is_zero_decimal_currency(currency) {
        stored
    } else {
        stored / Decimal::ONE_HUNDRED
    }
}

/// Amount and currency ready to be embedded in a price label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pricing {
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl Pricing {
    pub fn from_stored(stored: Decimal, currency: &CurrencyCode) -> Self {
        Self {
            amount: display_amount(stored, currency),
            currency: currency.clone(),
        }
    }
}

impl fmt::Display for Pricing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_zero_decimal_currency(&self.currency) {
            write!(f, "{} {}", self.amount.round(), self.currency)
        } else {
            write!(f, "{:.2} {}", self.amount, self.currency)
        }
    }
}
