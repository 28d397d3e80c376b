// File: sustainer-cli/src/report.rs

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;
use serde::Serialize;
use tracing::{debug, info, warn};

use sustainer_core::Error;
use sustainer_core::badges::{CachedAssetLoader, FsBadgeAssetLoader, ProfileBadgeLookup};
use sustainer_core::services::{BadgeCantBeAddedSheet, DonationService, MySupportView, SupportAction};
use sustainer_core::status::SustainerStatus;
use sustainer_core::traits::provider_traits::BadgeAssetLoader;

use crate::args::Args;
use crate::host::{Snapshot, SnapshotAssetLoader, SnapshotHost};

#[derive(Debug, Clone, Serialize)]
pub struct ReceiptLine {
    pub receipt_id: String,
    pub boost: bool,
    pub badge_id: Option<String>,
    pub icon: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub receipts: Vec<ReceiptLine>,
    pub subscription: Option<MySupportView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cant_add_badge_sheet: Option<BadgeCantBeAddedSheet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_support: Option<SupportAction>,
}

fn asset_loader(args: &Args) -> Arc<dyn BadgeAssetLoader> {
    match &args.assets_dir {
        Some(dir) => {
            info!("Loading badge assets from {}", dir.display());
            Arc::new(CachedAssetLoader::new(FsBadgeAssetLoader::new(dir)))
        }
        None => Arc::new(SnapshotAssetLoader),
    }
}

pub async fn run(args: &Args) -> Result<Report, Error> {
    let snapshot = Snapshot::load(&args.snapshot).await?;
    let boost_badge = snapshot.boost_badge.clone();
    let receipts = snapshot.receipts.clone();
    let catalog = snapshot.levels.clone();

    let host = Arc::new(SnapshotHost::new(snapshot, args.pending, args.support_email));
    let loader = asset_loader(args);
    let service = DonationService::new(
        host.clone(),
        host.clone(),
        loader.clone(),
        host.clone(),
        host.clone(),
        host,
    );

    // Without an asset directory only inline snapshot assets exist; nothing to populate.
    let has_asset_source = args.assets_dir.is_some();
    let levels = if has_asset_source {
        match service.load_subscription_levels().await {
            Ok(levels) => levels,
            Err(e) => {
                warn!("Could not load every level badge ({}); continuing with partial assets", e);
                catalog
            }
        }
    } else {
        debug!("No asset directory configured; using inline snapshot assets only");
        catalog
    };

    let lookup = ProfileBadgeLookup::new(boost_badge, &levels);
    if has_asset_source {
        lookup.attempt_to_populate_badge_assets(loader.as_ref()).await;
    }

    let receipts = receipts
        .iter()
        .map(|receipt| {
            let badge = lookup.badge_for_receipt(receipt);
            ReceiptLine {
                receipt_id: receipt.id.clone(),
                boost: receipt.is_boost(),
                badge_id: badge.map(|b| b.id.clone()),
                icon: lookup
                    .icon_for_receipt(receipt, args.dark)
                    .map(|icon| icon.path.clone()),
            }
        })
        .collect();

    let mut report = Report {
        receipts,
        subscription: None,
        cant_add_badge_sheet: None,
        contact_support: None,
    };

    let Some(subscription) = service
        .load_current_subscription(args.subscriber_id.as_ref())
        .await?
    else {
        return Ok(report);
    };

    let level = DonationService::subscription_level_for_subscription(&levels, &subscription);
    let reason = service.redemption_failure_reason(Some(&subscription));
    let view = service.current_subscription_view(level, &subscription, reason);

    if view.status.is_failure() {
        report.cant_add_badge_sheet = Some(service.badge_cant_be_added_sheet(Some(&subscription)));
        report.contact_support = Some(service.contact_support());
    }
    report.subscription = Some(view);
    Ok(report)
}

impl Report {
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for line in &self.receipts {
            let kind = if line.boost { "boost" } else { "subscription" };
            let badge = line.badge_id.as_deref().unwrap_or("-");
            let icon = line
                .icon
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".into());
            let _ = writeln!(out, "receipt {} ({}): badge={} icon={}", line.receipt_id, kind, badge, icon);
        }

        match &self.subscription {
            None => {
                let _ = writeln!(out, "no current subscription");
            }
            Some(view) => {
                let title = view.title.as_deref().unwrap_or("(unknown level)");
                let _ = writeln!(out, "{} - {}/month", title, view.pricing);
                let status = match &view.status {
                    SustainerStatus::Pending => "processing transaction".to_string(),
                    SustainerStatus::PaymentError => "payment error - contact support".to_string(),
                    SustainerStatus::CantAddBadge => "couldn't add badge - contact support".to_string(),
                    SustainerStatus::Active { .. } => format!(
                        "renews {}",
                        view.status.renewal_date_label().unwrap_or_default()
                    ),
                };
                let _ = writeln!(out, "status: {}", status);
            }
        }

        if let Some(action) = &self.contact_support {
            let _ = writeln!(out, "contact support: {:?}", action);
        }
        out
    }
}
