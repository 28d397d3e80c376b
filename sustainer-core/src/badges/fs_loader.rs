// File: sustainer-core/src/badges/fs_loader.rs

use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tracing::debug;

use crate::Error;
use crate::models::{Badge, BadgeAssets, Icon};
use crate::traits::provider_traits::BadgeAssetLoader;

pub const LIGHT_16: &str = "light16.png";
pub const DARK_16: &str = "dark16.png";
pub const UNIVERSAL_160: &str = "universal160.png";

/// Finds badge images already on disk, laid out as
/// `<root>/<badge id>/{light16,dark16,universal160}.png`.
#[derive(Debug, Clone)]
pub struct FsBadgeAssetLoader {
    root: PathBuf,
}

impl FsBadgeAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn require_file(&self, badge: &Badge, name: &str) -> Result<Icon, Error> {
        let path = self.root.join(&badge.id).join(name);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(Icon::new(path)),
            Ok(_) => Err(Error::AssetLoad(format!("{} is not a file", path.display()))),
            Err(e) => Err(Error::AssetLoad(format!("{}: {}", path.display(), e))),
        }
    }
}

#[async_trait]
impl BadgeAssetLoader for FsBadgeAssetLoader {
    async fn load_assets(&self, badge: &Badge) -> Result<BadgeAssets, Error> {
        if badge.id.is_empty() || badge.id.contains(['/', '\\']) || badge.id == ".." {
            return Err(Error::AssetLoad(format!("Invalid badge id '{}'", badge.id)));
        }

        let (light16, dark16, universal160) = tokio::try_join!(
            self.require_file(badge, LIGHT_16),
            self.require_file(badge, DARK_16),
            self.require_file(badge, UNIVERSAL_160),
        )?;
        debug!("Located assets for badge '{}' under {}", badge.id, self.root.display());

        Ok(BadgeAssets { light16, dark16, universal160 })
    }
}
