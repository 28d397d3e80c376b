// File: sustainer-common/src/models/badge.rs

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use serde::{Deserialize, Serialize};

/// A single rendered badge image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub path: PathBuf,
}

impl Icon {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// The themed variants a badge ships with once its assets are populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeAssets {
    pub light16: Icon,
    pub dark16: Icon,
    pub universal160: Icon,
}

/// A profile badge as described by the backend.
///
/// The asset bundle is filled in at most once, either from the backend
/// response or by a later population pass. Clones share the same bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "assets_cell")]
    assets: Arc<OnceLock<BadgeAssets>>,
}

impl Badge {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            assets: Arc::new(OnceLock::new()),
        }
    }

    pub fn with_assets(mut self, assets: BadgeAssets) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(assets);
        self.assets = Arc::new(cell);
        self
    }

    pub fn assets(&self) -> Option<&BadgeAssets> {
        self.assets.get()
    }

    /// Stores the populated bundle. Returns false when the badge already had one.
    pub fn set_assets(&self, assets: BadgeAssets) -> bool {
        self.assets.set(assets).is_ok()
    }
}

impl PartialEq for Badge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Badge {}

mod assets_cell {
    use std::sync::{Arc, OnceLock};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use super::BadgeAssets;

    pub fn serialize<S>(cell: &Arc<OnceLock<BadgeAssets>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        cell.get().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Arc<OnceLock<BadgeAssets>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cell = OnceLock::new();
        if let Some(assets) = Option::<BadgeAssets>::deserialize(deserializer)? {
            let _ = cell.set(assets);
        }
        Ok(Arc::new(cell))
    }
}
