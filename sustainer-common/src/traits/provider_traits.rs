// File: sustainer-common/src/traits/provider_traits.rs
//
// Collaborators the host application supplies. The decision logic in
// sustainer-core only ever reads their current answers.

use async_trait::async_trait;
use crate::error::Error;
use crate::models::{Badge, BadgeAssets, SubscriberId, Subscription, SubscriptionLevel};

/// Backend catalog of recurring donation levels.
#[async_trait]
pub trait SubscriptionCatalog: Send + Sync {
    async fn fetch_subscription_levels(&self) -> Result<Vec<SubscriptionLevel>, Error>;
}

/// Backend lookup of a subscriber's current subscription.
#[async_trait]
pub trait SubscriptionStatusSource: Send + Sync {
    async fn fetch_current_subscription(
        &self,
        subscriber_id: &SubscriberId,
    ) -> Result<Option<Subscription>, Error>;
}

/// Downloads (or locates) the image bundle for a badge.
#[async_trait]
pub trait BadgeAssetLoader: Send + Sync {
    async fn load_assets(&self, badge: &Badge) -> Result<BadgeAssets, Error>;
}

/// Read-only view of the redemption job queue.
pub trait RedemptionJobQueue: Send + Sync {
    fn has_pending_jobs(&self) -> bool;
    fn running_operation_count(&self) -> usize;
}

/// Persisted outcome of the last receipt redemption.
pub trait RedemptionFailureStore: Send + Sync {
    fn last_receipt_redemption_failed(&self) -> bool;
}

/// Whether the device can compose a support email.
pub trait SupportMailer: Send + Sync {
    fn can_send_emails(&self) -> bool;
}
