// File: sustainer-cli/src/host.rs
//
// Host-side collaborators backed by a JSON snapshot instead of a live backend.

use std::collections::HashMap;
use std::path::Path;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use sustainer_core::Error;
use sustainer_core::models::{
    Badge, BadgeAssets, DonationReceipt, SubscriberId, Subscription, SubscriptionLevel,
};
use sustainer_core::traits::provider_traits::{
    BadgeAssetLoader, RedemptionFailureStore, RedemptionJobQueue, SubscriptionCatalog,
    SubscriptionStatusSource, SupportMailer,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub levels: Vec<SubscriptionLevel>,
    #[serde(default)]
    pub boost_badge: Option<Badge>,
    #[serde(default)]
    pub subscriptions: HashMap<SubscriberId, Subscription>,
    #[serde(default)]
    pub receipts: Vec<DonationReceipt>,
    #[serde(default)]
    pub last_receipt_redemption_failed: bool,
    #[serde(default)]
    pub pending_jobs: u32,
    #[serde(default)]
    pub running_jobs: u32,
}

impl Snapshot {
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let raw = tokio::fs::read_to_string(path).await?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        info!(
            "Loaded snapshot {}: {} levels, {} subscriptions, {} receipts",
            path.display(),
            snapshot.levels.len(),
            snapshot.subscriptions.len(),
            snapshot.receipts.len()
        );
        Ok(snapshot)
    }
}

pub struct SnapshotHost {
    snapshot: Snapshot,
    force_pending: bool,
    can_send_emails: bool,
}

impl SnapshotHost {
    pub fn new(snapshot: Snapshot, force_pending: bool, can_send_emails: bool) -> Self {
        Self {
            snapshot,
            force_pending,
            can_send_emails,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl SubscriptionCatalog for SnapshotHost {
    async fn fetch_subscription_levels(&self) -> Result<Vec<SubscriptionLevel>, Error> {
        Ok(self.snapshot.levels.clone())
    }
}

#[async_trait]
impl SubscriptionStatusSource for SnapshotHost {
    async fn fetch_current_subscription(
        &self,
        subscriber_id: &SubscriberId,
    ) -> Result<Option<Subscription>, Error> {
        Ok(self.snapshot.subscriptions.get(subscriber_id).cloned())
    }
}

impl RedemptionJobQueue for SnapshotHost {
    fn has_pending_jobs(&self) -> bool {
        self.force_pending || self.snapshot.pending_jobs > 0
    }

    fn running_operation_count(&self) -> usize {
        self.snapshot.running_jobs as usize
    }
}

impl RedemptionFailureStore for SnapshotHost {
    fn last_receipt_redemption_failed(&self) -> bool {
        self.snapshot.last_receipt_redemption_failed
    }
}

impl SupportMailer for SnapshotHost {
    fn can_send_emails(&self) -> bool {
        self.can_send_emails
    }
}

/// Loader handed to the service when no asset directory is configured. The
/// report skips population in that case, so this only echoes inline assets.
pub struct SnapshotAssetLoader;

#[async_trait]
impl BadgeAssetLoader for SnapshotAssetLoader {
    async fn load_assets(&self, badge: &Badge) -> Result<BadgeAssets, Error> {
        badge
            .assets()
            .cloned()
            .ok_or_else(|| Error::AssetLoad(format!("no asset directory configured for '{}'", badge.id)))
    }
}
