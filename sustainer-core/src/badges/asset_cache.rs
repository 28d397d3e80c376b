// File: sustainer-core/src/badges/asset_cache.rs

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use tracing::debug;

use crate::Error;
use crate::models::{Badge, BadgeAssets};
use crate::traits::provider_traits::BadgeAssetLoader;

#[derive(Debug, Clone)]
struct CachedAssets {
    assets: BadgeAssets,
    loaded_at: DateTime<Utc>,
}

const CACHE_MAX_AGE_SECS: i64 = 24 * 3600;

/// Wraps another loader and remembers each badge's bundle by badge id, so
/// repeated population passes do not hit the underlying source again.
pub struct CachedAssetLoader<L> {
    inner: L,
    max_age: Duration,
    cache: DashMap<String, CachedAssets>,
}

impl<L: BadgeAssetLoader> CachedAssetLoader<L> {
    pub fn new(inner: L) -> Self {
        Self::with_max_age(inner, Duration::seconds(CACHE_MAX_AGE_SECS))
    }

    pub fn with_max_age(inner: L, max_age: Duration) -> Self {
        Self {
            inner,
            max_age,
            cache: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn invalidate(&self, badge_id: &str) {
        self.cache.remove(badge_id);
    }

    fn prune(&self) {
        let now = Utc::now();
        self.cache
            .retain(|_, entry| now.signed_duration_since(entry.loaded_at) < self.max_age);
    }
}

#[async_trait]
impl<L: BadgeAssetLoader> BadgeAssetLoader for CachedAssetLoader<L> {
    async fn load_assets(&self, badge: &Badge) -> Result<BadgeAssets, Error> {
        self.prune();

        if let Some(entry) = self.cache.get(&badge.id) {
            debug!("Asset cache hit for badge '{}'", badge.id);
            return Ok(entry.assets.clone());
        }

        // Failures are not cached; the next pass tries again.
        let assets = self.inner.load_assets(badge).await?;
        self.cache.insert(
            badge.id.clone(),
            CachedAssets {
                assets: assets.clone(),
                loaded_at: Utc::now(),
            },
        );
        Ok(assets)
    }
}
