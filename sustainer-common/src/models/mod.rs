// File: sustainer-common/src/models/mod.rs
pub mod badge;
pub mod currency;
pub mod receipt;
pub mod redemption;
pub mod subscription;

pub use badge::{Badge, BadgeAssets, Icon};
pub use currency::CurrencyCode;
pub use receipt::DonationReceipt;
pub use redemption::RedemptionFailureReason;
pub use subscription::{SubscriberId, Subscription, SubscriptionLevel, SubscriptionStatus};
