// File: sustainer-common/src/models/receipt.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::models::currency::CurrencyCode;

/// A record of a completed donation.
///
/// A receipt without a subscription level belongs to a one-time boost.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_level: Option<u32>,
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl DonationReceipt {
    pub fn is_boost(&self) -> bool {
        self.subscription_level.is_none()
    }
}
