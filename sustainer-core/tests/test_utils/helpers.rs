// File: sustainer-core/tests/test_utils/helpers.rs
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use sustainer_core::models::{
    Badge, BadgeAssets, DonationReceipt, Icon, Subscription, SubscriptionLevel, SubscriptionStatus,
};

pub fn assets_for(id: &str) -> BadgeAssets {
    BadgeAssets {
        light16: Icon::new(format!("{id}/light16.png")),
        dark16: Icon::new(format!("{id}/dark16.png")),
        universal160: Icon::new(format!("{id}/universal160.png")),
    }
}

pub fn level(level: u32, badge_id: &str) -> SubscriptionLevel {
    SubscriptionLevel {
        level,
        name: format!("Level {level}"),
        badge: Badge::new(badge_id, badge_id),
    }
}

pub fn receipt(subscription_level: Option<u32>) -> DonationReceipt {
    DonationReceipt {
        id: "receipt-1".into(),
        timestamp: Utc::now(),
        subscription_level,
        amount: Decimal::from(500),
        currency: "USD".parse().unwrap(),
    }
}

pub fn period_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap()
}

pub fn subscription(status: SubscriptionStatus, amount: i64, currency: &str) -> Subscription {
    Subscription {
        level: 500,
        amount: Decimal::from(amount),
        currency: currency.parse().unwrap(),
        status,
        end_of_current_period: period_end(),
        cancel_at_end_of_period: false,
    }
}
