// File: sustainer-core/src/badges/lookup.rs

use std::collections::HashMap;
use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::models::{Badge, DonationReceipt, Icon, SubscriptionLevel};
use crate::traits::provider_traits::BadgeAssetLoader;

/// Badge for a receipt: a level receipt only ever maps through `level_to_badge`,
/// a boost receipt (no level) always gets `boost_badge`.
pub fn resolve_badge<'a>(
    receipt: &DonationReceipt,
    level_to_badge: &'a HashMap<u32, Badge>,
    boost_badge: Option<&'a Badge>,
) -> Option<&'a Badge> {
    match receipt.subscription_level {
        Some(level) => level_to_badge.get(&level),
        None => boost_badge,
    }
}

/// Themed 16pt variant, or `None` if the badge has no assets yet.
pub fn icon_for(badge: &Badge, prefer_dark_theme: bool) -> Option<&Icon> {
    let assets = badge.assets()?;
    if prefer_dark_theme {
        Some(&assets.dark16)
    } else {
        Some(&assets.light16)
    }
}

/// Loads assets for every distinct badge id concurrently and waits for all of them.
///
/// Badges sharing an id are loaded once and every instance receives the bundle.
/// This pass is best effort. A failed load is logged and dropped so the
/// caller only ever sees completion; badges that failed simply keep no assets.
pub async fn bulk_populate_assets<'a, I, L>(badges: I, loader: &L)
where
    I: IntoIterator<Item = &'a Badge>,
    L: BadgeAssetLoader + ?Sized,
{
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Badge>> = Vec::new();
    for badge in badges {
        match group_index.get(badge.id.as_str()) {
            Some(&idx) => groups[idx].push(badge),
            None => {
                group_index.insert(badge.id.as_str(), groups.len());
                groups.push(vec![badge]);
            }
        }
    }

    let results = join_all(groups.iter().map(|group| async move {
        (group, loader.load_assets(group[0]).await)
    }))
    .await;

    for (group, result) in results {
        match result {
            Ok(assets) => {
                for badge in group {
                    if !badge.set_assets(assets.clone()) {
                        debug!("Badge '{}' already had assets; keeping existing bundle", badge.id);
                    }
                }
            }
            Err(e) => warn!("Could not populate assets for badge '{}': {}", group[0].id, e),
        }
    }
}

/// Immutable level -> badge table plus the optional boost badge.
#[derive(Debug, Clone, Default)]
pub struct ProfileBadgeLookup {
    boost_badge: Option<Badge>,
    badges_by_level: HashMap<u32, Badge>,
}

impl ProfileBadgeLookup {
    pub fn new(boost_badge: Option<Badge>, subscription_levels: &[SubscriptionLevel]) -> Self {
        let badges_by_level = subscription_levels
            .iter()
            .map(|level| (level.level, level.badge.clone()))
            .collect();
        Self { boost_badge, badges_by_level }
    }

    pub fn boost_badge(&self) -> Option<&Badge> {
        self.boost_badge.as_ref()
    }

    pub fn badge_for_level(&self, level: u32) -> Option<&Badge> {
        self.badges_by_level.get(&level)
    }

    pub fn badge_for_receipt(&self, receipt: &DonationReceipt) -> Option<&Badge> {
        resolve_badge(receipt, &self.badges_by_level, self.boost_badge.as_ref())
    }

    pub fn icon_for_receipt(&self, receipt: &DonationReceipt, prefer_dark_theme: bool) -> Option<&Icon> {
        icon_for(self.badge_for_receipt(receipt)?, prefer_dark_theme)
    }

    /// Every level badge plus the boost badge.
    pub fn badges(&self) -> impl Iterator<Item = &Badge> {
        self.badges_by_level.values().chain(self.boost_badge.iter())
    }

    pub async fn attempt_to_populate_badge_assets<L>(&self, loader: &L)
    where
        L: BadgeAssetLoader + ?Sized,
    {
        bulk_populate_assets(self.badges(), loader).await;
    }
}
