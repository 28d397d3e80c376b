// sustainer-cli/src/lib.rs

pub mod args;
pub mod host;
pub mod report;

pub use args::{Args, OutputFormat};
pub use host::{SnapshotAssetLoader, SnapshotHost, Snapshot};
pub use report::{run, Report};
