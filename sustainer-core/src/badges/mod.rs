pub mod lookup;
pub mod asset_cache;
pub mod fs_loader;

pub use lookup::{bulk_populate_assets, icon_for, resolve_badge, ProfileBadgeLookup};
pub use asset_cache::CachedAssetLoader;
pub use fs_loader::FsBadgeAssetLoader;
