// File: sustainer-core/tests/status_classifier_tests.rs

use rust_decimal::Decimal;
use sustainer_core::models::{RedemptionFailureReason, SubscriptionStatus};
use sustainer_core::status::{classify, redemption_failure_reason, SustainerStatus};

#[path = "test_utils/helpers.rs"]
mod helpers;
use helpers::{period_end, subscription};

const ALL_STATUSES: [SubscriptionStatus; 8] = [
    SubscriptionStatus::Active,
    SubscriptionStatus::Trialing,
    SubscriptionStatus::PastDue,
    SubscriptionStatus::Canceled,
    SubscriptionStatus::Unpaid,
    SubscriptionStatus::Incomplete,
    SubscriptionStatus::IncompleteExpired,
    SubscriptionStatus::Other,
];

#[test]
fn test_failure_reason_prefers_incomplete_payment() {
    for status in [SubscriptionStatus::Incomplete, SubscriptionStatus::IncompleteExpired] {
        let sub = subscription(status, 500, "USD");
        assert_eq!(redemption_failure_reason(Some(&sub), false), RedemptionFailureReason::PaymentFailed);
        assert_eq!(redemption_failure_reason(Some(&sub), true), RedemptionFailureReason::PaymentFailed);
    }

    let sub = subscription(SubscriptionStatus::Active, 500, "USD");
    assert_eq!(redemption_failure_reason(Some(&sub), true), RedemptionFailureReason::BadgeAddFailed);
    assert_eq!(redemption_failure_reason(Some(&sub), false), RedemptionFailureReason::None);
}

#[test]
fn test_failure_reason_without_subscription_uses_flag() {
    assert_eq!(redemption_failure_reason(None, true), RedemptionFailureReason::BadgeAddFailed);
    assert_eq!(redemption_failure_reason(None, false), RedemptionFailureReason::None);
}

#[test]
fn test_pending_wins_over_everything() {
    for status in ALL_STATUSES {
        for failed in [false, true] {
            let sub = subscription(status, 500, "USD");
            assert_eq!(classify(&sub, true, failed), SustainerStatus::Pending);
        }
    }
}

#[test]
fn test_incomplete_is_payment_error_regardless_of_flag() {
    for status in [SubscriptionStatus::Incomplete, SubscriptionStatus::IncompleteExpired] {
        for failed in [false, true] {
            let sub = subscription(status, 500, "USD");
            assert_eq!(classify(&sub, false, failed), SustainerStatus::PaymentError);
        }
    }
}

#[test]
fn test_failed_redemption_on_active_subscription() {
    let sub = subscription(SubscriptionStatus::Active, 500, "USD");
    let status = classify(&sub, false, true);
    assert_eq!(status, SustainerStatus::CantAddBadge);
    assert!(status.is_failure());
    assert!(status.renewal_date_label().is_none());
}

#[test]
fn test_active_divides_amount_for_decimal_currencies() {
    let sub = subscription(SubscriptionStatus::Active, 500, "USD");
    match classify(&sub, false, false) {
        SustainerStatus::Active { pricing, renewal_date } => {
            assert_eq!(pricing.amount, Decimal::from(5));
            assert_eq!(pricing.currency.as_str(), "USD");
            assert_eq!(renewal_date, period_end());
        }
        other => panic!("expected active, got {:?}", other),
    }
}

#[test]
fn test_active_keeps_zero_decimal_amount() {
    let sub = subscription(SubscriptionStatus::Active, 500, "JPY");
    match classify(&sub, false, false) {
        SustainerStatus::Active { pricing, .. } => assert_eq!(pricing.amount, Decimal::from(500)),
        other => panic!("expected active, got {:?}", other),
    }
}

#[test]
fn test_other_statuses_render_as_active() {
    for status in [SubscriptionStatus::PastDue, SubscriptionStatus::Canceled, SubscriptionStatus::Other] {
        let sub = subscription(status, 1000, "EUR");
        assert!(matches!(classify(&sub, false, false), SustainerStatus::Active { .. }));
    }
}

#[test]
fn test_renewal_label_uses_medium_date() {
    let sub = subscription(SubscriptionStatus::Active, 500, "USD");
    let status = classify(&sub, false, false);
    assert_eq!(status.renewal_date_label().as_deref(), Some("Jan 5, 2026"));
    assert!(!status.is_pending());
    assert!(!status.is_failure());
}

#[test]
fn test_status_serializes_with_state_tag() {
    let sub = subscription(SubscriptionStatus::Active, 500, "USD");
    let json = serde_json::to_value(classify(&sub, true, false)).unwrap();
    assert_eq!(json["state"], "pending");

    let json = serde_json::to_value(classify(&sub, false, true)).unwrap();
    assert_eq!(json["state"], "cant_add_badge");
}
