// File: sustainer-core/src/status/classifier.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::models::{RedemptionFailureReason, Subscription};
use crate::status::pricing::Pricing;

/// What the "my support" row should tell the user about their subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SustainerStatus {
    /// A redemption job is queued or running.
    Pending,
    PaymentError,
    CantAddBadge,
    Active { pricing: Pricing, renewal_date: DateTime<Utc> },
}

impl SustainerStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SustainerStatus::Pending)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SustainerStatus::PaymentError | SustainerStatus::CantAddBadge)
    }

    /// Medium-style renewal date, e.g. `Jan 5, 2026`. Only active subscriptions have one.
    pub fn renewal_date_label(&self) -> Option<String> {
        match self {
            SustainerStatus::Active { renewal_date, .. } => {
                Some(renewal_date.format("%b %-d, %Y").to_string())
            }
            _ => None,
        }
    }
}

/// Payment trouble on the subscription itself outranks the persisted
/// redemption flag. A missing subscription can only fail on the flag.
pub fn redemption_failure_reason(
    subscription: Option<&Subscription>,
    last_receipt_redemption_failed: bool,
) -> RedemptionFailureReason {
    match (subscription, last_receipt_redemption_failed) {
        (Some(sub), _) if sub.status.is_incomplete() => RedemptionFailureReason::PaymentFailed,
        (_, true) => RedemptionFailureReason::BadgeAddFailed,
        (_, false) => RedemptionFailureReason::None,
    }
}

/// Picks the display state. Evaluated top to bottom; the first arm wins.
pub fn classify(
    subscription: &Subscription,
    redemption_pending: bool,
    last_receipt_redemption_failed: bool,
) -> SustainerStatus {
    let reason = redemption_failure_reason(Some(subscription), last_receipt_redemption_failed);
    let status = status_for(subscription, redemption_pending, reason);
    debug!(
        "Classified subscription level {} (status={:?}, pending={}, reason={}) as {:?}",
        subscription.level, subscription.status, redemption_pending, reason, status
    );
    status
}

/// Same as [`classify`] for callers that already hold a failure reason.
pub fn status_for(
    subscription: &Subscription,
    redemption_pending: bool,
    reason: RedemptionFailureReason,
) -> SustainerStatus {
    match (redemption_pending, reason) {
        (true, _) => SustainerStatus::Pending,
        (false, RedemptionFailureReason::PaymentFailed) => SustainerStatus::PaymentError,
        (false, RedemptionFailureReason::BadgeAddFailed) => SustainerStatus::CantAddBadge,
        (false, RedemptionFailureReason::None) => SustainerStatus::Active {
            pricing: Pricing::from_stored(subscription.amount, &subscription.currency),
            renewal_date: subscription.end_of_current_period,
        },
    }
}
