// File: sustainer-common/src/models/redemption.rs

use std::fmt;
use serde::{Deserialize, Serialize};

/// Why the most recent badge redemption did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionFailureReason {
    #[default]
    None,
    PaymentFailed,
    BadgeAddFailed,
}

impl RedemptionFailureReason {
    pub fn is_failure(&self) -> bool {
        !matches!(self, RedemptionFailureReason::None)
    }
}

impl fmt::Display for RedemptionFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedemptionFailureReason::None => write!(f, "none"),
            RedemptionFailureReason::PaymentFailed => write!(f, "payment_failed"),
            RedemptionFailureReason::BadgeAddFailed => write!(f, "badge_add_failed"),
        }
    }
}
