// File: sustainer-common/src/models/subscription.rs

use std::fmt;
use std::str::FromStr;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::models::badge::Badge;
use crate::models::currency::CurrencyCode;

/// One tier of the recurring donation catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionLevel {
    pub level: u32,
    pub name: String,
    pub badge: Badge,
}

/// Backend status of a recurring subscription. Only the two `Incomplete`
/// variants matter to redemption; everything unrecognized lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    PastDue,
    Canceled,
    Unpaid,
    Incomplete,
    IncompleteExpired,
    #[serde(other)]
    Other,
}

impl SubscriptionStatus {
    /// The initial payment never completed.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, SubscriptionStatus::Incomplete | SubscriptionStatus::IncompleteExpired)
    }
}

/// Snapshot of the user's current subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub level: u32,
    /// Stored in the currency's smallest unit.
    pub amount: Decimal,
    pub currency: CurrencyCode,
    pub status: SubscriptionStatus,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub end_of_current_period: DateTime<Utc>,
    #[serde(default)]
    pub cancel_at_end_of_period: bool,
}

/// Opaque subscriber identifier, base64 in text form.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriberId(Vec<u8>);

impl SubscriberId {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(&self.0))
    }
}

// keep the raw id out of logs
impl fmt::Debug for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberId({} bytes)", self.0.len())
    }
}

impl FromStr for SubscriberId {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = STANDARD.decode(s.trim())?;
        if bytes.is_empty() {
            return Err(crate::error::Error::Parse("empty subscriber id".into()));
        }
        Ok(SubscriberId(bytes))
    }
}

impl TryFrom<String> for SubscriberId {
    type Error = crate::error::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SubscriberId> for String {
    fn from(id: SubscriberId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_maps_to_other() {
        let status: SubscriptionStatus = serde_json::from_str(r#""paused""#).unwrap();
        assert_eq!(status, SubscriptionStatus::Other);
        let status: SubscriptionStatus = serde_json::from_str(r#""incomplete_expired""#).unwrap();
        assert!(status.is_incomplete());
        assert!(!SubscriptionStatus::PastDue.is_incomplete());
    }

    #[test]
    fn subscriber_id_text_form() {
        let id = SubscriberId::new(vec![1u8, 2, 3, 4]);
        let text = id.to_string();
        assert_eq!(text, "AQIDBA==");
        assert_eq!(text.parse::<SubscriberId>().unwrap(), id);
        assert!("".parse::<SubscriberId>().is_err());
        assert!("not base64!".parse::<SubscriberId>().is_err());
        assert_eq!(format!("{:?}", id), "SubscriberId(4 bytes)");
    }

    #[test]
    fn subscription_reads_epoch_seconds() {
        let json = r#"{
            "level": 500,
            "amount": 500,
            "currency": "usd",
            "status": "active",
            "end_of_current_period": 1767225600
        }"#;
        let sub: Subscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.currency.as_str(), "USD");
        assert_eq!(sub.amount, Decimal::from(500));
        assert_eq!(sub.end_of_current_period.timestamp(), 1_767_225_600);
        assert!(!sub.cancel_at_end_of_period);
    }
}
