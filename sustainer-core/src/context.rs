// File: sustainer-core/src/context.rs
//
// Process-role answers for code that can run either inside the main app or
// inside the notification service extension.

use std::path::PathBuf;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::Error;

/// How long a build stays usable after its build timestamp.
pub const BUILD_LIFETIME_DAYS: i64 = 90;

pub trait AppContext: Send + Sync {
    fn is_main_app(&self) -> bool;
    fn is_main_app_and_active(&self) -> bool;
    fn is_extension(&self) -> bool;
    fn is_in_background(&self) -> bool;
    fn has_ui(&self) -> bool;
    fn should_process_incoming_messages(&self) -> bool;
    fn can_present_notifications(&self) -> bool;

    /// `None` means the build carries no timestamp and never expires.
    fn build_time(&self) -> Option<DateTime<Utc>>;

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.build_time() {
            Some(built) => now >= built + chrono::Duration::days(BUILD_LIFETIME_DAYS),
            None => false,
        }
    }

    fn document_directory(&self) -> Result<PathBuf, Error>;
    fn shared_data_directory(&self) -> Result<PathBuf, Error>;
    fn database_base_directory(&self) -> Result<PathBuf, Error>;

    fn set_main_app_badge_number(&self, value: i64);
    fn desired_badge_number(&self) -> Option<i64>;
}

/// Context for the notification service extension. It has no UI, always runs
/// in the background and shares its data directory with the main app.
pub struct ExtensionContext {
    app_group: String,
    launch_time: DateTime<Utc>,
    build_time: Option<DateTime<Utc>>,
    // The extension cannot touch the app icon badge; the host applies this later.
    desired_badge_number: Mutex<Option<i64>>,
}

impl ExtensionContext {
    pub fn new(app_group: impl Into<String>, build_timestamp: Option<i64>) -> Self {
        let build_time = match build_timestamp {
            Some(ts) if ts > 0 => DateTime::<Utc>::from_timestamp(ts, 0),
            _ => None,
        };
        if build_time.is_none() {
            debug!("No build timestamp, assuming app never expires.");
        }

        Self {
            app_group: app_group.into(),
            launch_time: Utc::now(),
            build_time,
            desired_badge_number: Mutex::new(None),
        }
    }

    pub fn launch_time(&self) -> DateTime<Utc> {
        self.launch_time
    }
}

impl AppContext for ExtensionContext {
    fn is_main_app(&self) -> bool {
        false
    }

    fn is_main_app_and_active(&self) -> bool {
        false
    }

    fn is_extension(&self) -> bool {
        true
    }

    fn is_in_background(&self) -> bool {
        true
    }

    fn has_ui(&self) -> bool {
        false
    }

    fn should_process_incoming_messages(&self) -> bool {
        true
    }

    fn can_present_notifications(&self) -> bool {
        true
    }

    fn build_time(&self) -> Option<DateTime<Utc>> {
        self.build_time
    }

    fn document_directory(&self) -> Result<PathBuf, Error> {
        dirs::document_dir()
            .ok_or_else(|| Error::Config("failed to query document directory".into()))
    }

    fn shared_data_directory(&self) -> Result<PathBuf, Error> {
        dirs::data_dir()
            .map(|dir| dir.join(&self.app_group))
            .ok_or_else(|| Error::Config("failed to query group container".into()))
    }

    fn database_base_directory(&self) -> Result<PathBuf, Error> {
        self.shared_data_directory()
    }

    fn set_main_app_badge_number(&self, value: i64) {
        *self.desired_badge_number.lock() = Some(value);
    }

    fn desired_badge_number(&self) -> Option<i64> {
        *self.desired_badge_number.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn extension_answers_fixed_role_questions() {
        let ctx = ExtensionContext::new("group.org.example.sustainer", None);
        assert!(!ctx.is_main_app());
        assert!(!ctx.is_main_app_and_active());
        assert!(ctx.is_extension());
        assert!(ctx.is_in_background());
        assert!(!ctx.has_ui());
        assert!(ctx.should_process_incoming_messages());
        assert!(ctx.can_present_notifications());
        assert!(ctx.launch_time() <= Utc::now());
    }

    #[test]
    fn missing_or_zero_build_time_never_expires() {
        let far_future = Utc::now() + Duration::days(365 * 50);
        for ts in [None, Some(0), Some(-5)] {
            let ctx = ExtensionContext::new("group", ts);
            assert!(ctx.build_time().is_none());
            assert!(!ctx.is_expired(far_future));
        }
    }

    #[test]
    fn build_time_expires_after_lifetime() {
        let ctx = ExtensionContext::new("group", Some(1_700_000_000));
        let built = ctx.build_time().unwrap();
        assert!(!ctx.is_expired(built + Duration::days(BUILD_LIFETIME_DAYS - 1)));
        assert!(ctx.is_expired(built + Duration::days(BUILD_LIFETIME_DAYS)));
    }

    #[test]
    fn badge_number_is_cached_for_host() {
        let ctx = ExtensionContext::new("group", None);
        assert_eq!(ctx.desired_badge_number(), None);
        ctx.set_main_app_badge_number(3);
        ctx.set_main_app_badge_number(7);
        assert_eq!(ctx.desired_badge_number(), Some(7));
    }

    #[test]
    fn database_lives_in_shared_directory() {
        let ctx = ExtensionContext::new("group.test", None);
        if let Ok(shared) = ctx.shared_data_directory() {
            assert!(shared.ends_with("group.test"));
            assert_eq!(ctx.database_base_directory().unwrap(), shared);
        }
    }
}
