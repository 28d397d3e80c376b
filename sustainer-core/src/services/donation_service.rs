// File: sustainer-core/src/services/donation_service.rs

use std::sync::Arc;
use futures_util::future::try_join_all;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::Error;
use crate::models::{
    Icon, RedemptionFailureReason, SubscriberId, Subscription, SubscriptionLevel,
};
use crate::services::support::{self, BadgeCantBeAddedSheet, SupportAction};
use crate::status::classifier::{self, SustainerStatus};
use crate::status::pricing::Pricing;
use crate::traits::provider_traits::{
    BadgeAssetLoader, RedemptionFailureStore, RedemptionJobQueue, SubscriptionCatalog,
    SubscriptionStatusSource, SupportMailer,
};

/// Everything the "my support" row needs to draw the current subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MySupportView {
    pub title: Option<String>,
    pub badge_icon: Option<Icon>,
    /// Badge drawn at half opacity.
    pub badge_dimmed: bool,
    pub show_spinner: bool,
    pub pricing: Pricing,
    pub status: SustainerStatus,
    /// Status text ends with a "contact support" link.
    pub contact_support_link: bool,
}

pub struct DonationService {
    catalog: Arc<dyn SubscriptionCatalog>,
    subscriptions: Arc<dyn SubscriptionStatusSource>,
    asset_loader: Arc<dyn BadgeAssetLoader>,
    job_queue: Arc<dyn RedemptionJobQueue>,
    failure_store: Arc<dyn RedemptionFailureStore>,
    mailer: Arc<dyn SupportMailer>,
}

impl DonationService {
    pub fn new(
        catalog: Arc<dyn SubscriptionCatalog>,
        subscriptions: Arc<dyn SubscriptionStatusSource>,
        asset_loader: Arc<dyn BadgeAssetLoader>,
        job_queue: Arc<dyn RedemptionJobQueue>,
        failure_store: Arc<dyn RedemptionFailureStore>,
        mailer: Arc<dyn SupportMailer>,
    ) -> Self {
        Self {
            catalog,
            subscriptions,
            asset_loader,
            job_queue,
            failure_store,
            mailer,
        }
    }

    /// Fetches the level catalog and populates every level badge's assets.
    /// Unlike the best-effort bulk pass, a single failed load fails the whole call.
    pub async fn load_subscription_levels(&self) -> Result<Vec<SubscriptionLevel>, Error> {
        let levels = self.catalog.fetch_subscription_levels().await?;
        info!("Fetched {} subscription levels", levels.len());

        let loads = levels
            .iter()
            .map(|level| self.asset_loader.load_assets(&level.badge));
        let bundles = try_join_all(loads).await?;

        for (level, assets) in levels.iter().zip(bundles) {
            level.badge.set_assets(assets);
        }
        Ok(levels)
    }

    pub async fn load_current_subscription(
        &self,
        subscriber_id: Option<&SubscriberId>,
    ) -> Result<Option<Subscription>, Error> {
        match subscriber_id {
            Some(id) => self.subscriptions.fetch_current_subscription(id).await,
            None => {
                debug!("No subscriber id; skipping subscription fetch");
                Ok(None)
            }
        }
    }

    pub fn subscription_level_for_subscription<'a>(
        subscription_levels: &'a [SubscriptionLevel],
        subscription: &Subscription,
    ) -> Option<&'a SubscriptionLevel> {
        subscription_levels
            .iter()
            .find(|level| level.level == subscription.level)
    }

    /// Queued jobs or jobs currently running both count as pending.
    pub fn is_redemption_pending(&self) -> bool {
        self.job_queue.has_pending_jobs() || self.job_queue.running_operation_count() != 0
    }

    pub fn redemption_failure_reason(
        &self,
        subscription: Option<&Subscription>,
    ) -> RedemptionFailureReason {
        classifier::redemption_failure_reason(
            subscription,
            self.failure_store.last_receipt_redemption_failed(),
        )
    }

    /// Snapshots the queue and the failure flag, then classifies.
    pub fn current_status(&self, subscription: &Subscription) -> SustainerStatus {
        let pending = self.is_redemption_pending();
        let failed = self.failure_store.last_receipt_redemption_failed();
        classifier::classify(subscription, pending, failed)
    }

    pub fn current_subscription_view(
        &self,
        subscription_level: Option<&SubscriptionLevel>,
        current_subscription: &Subscription,
        failure_reason: RedemptionFailureReason,
    ) -> MySupportView {
        let is_pending = self.is_redemption_pending();
        let did_fail = failure_reason.is_failure();

        if subscription_level.is_none() {
            warn!(
                "No subscription level found for level {}; rendering without title or badge",
                current_subscription.level
            );
        }

        let status = classifier::status_for(current_subscription, is_pending, failure_reason);

        MySupportView {
            title: subscription_level.map(|level| level.name.clone()),
            badge_icon: subscription_level
                .and_then(|level| level.badge.assets())
                .map(|assets| assets.universal160.clone()),
            badge_dimmed: is_pending || did_fail,
            show_spinner: is_pending,
            pricing: Pricing::from_stored(current_subscription.amount, &current_subscription.currency),
            contact_support_link: status.is_failure(),
            status,
        }
    }

    pub fn badge_cant_be_added_sheet(
        &self,
        current_subscription: Option<&Subscription>,
    ) -> BadgeCantBeAddedSheet {
        support::badge_cant_be_added_sheet(self.redemption_failure_reason(current_subscription))
    }

    pub fn contact_support(&self) -> SupportAction {
        support::contact_support(self.mailer.as_ref())
    }
}
