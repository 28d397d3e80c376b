pub mod donation_service;
pub mod support;

pub use donation_service::{DonationService, MySupportView};
pub use support::{
    badge_cant_be_added_sheet, contact_support, ActionStyle, BadgeCantBeAddedSheet, SheetAction,
    SheetActionKind, SheetTitle, SupportAction, SupportFilter,
};
