// File: sustainer-core/src/services/support.rs

use serde::Serialize;
use tracing::info;

use crate::models::RedemptionFailureReason;
use crate::traits::provider_traits::SupportMailer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetTitle {
    ErrorProcessingPayment,
    CantAddBadge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetActionKind {
    ContactSupport,
    NotNow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    Default,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetAction {
    pub kind: SheetActionKind,
    pub style: ActionStyle,
}

/// Action sheet shown when a badge could not be redeemed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeCantBeAddedSheet {
    pub title: SheetTitle,
    pub actions: Vec<SheetAction>,
}

pub fn badge_cant_be_added_sheet(reason: RedemptionFailureReason) -> BadgeCantBeAddedSheet {
    let title = match reason {
        RedemptionFailureReason::PaymentFailed => SheetTitle::ErrorProcessingPayment,
        RedemptionFailureReason::BadgeAddFailed | RedemptionFailureReason::None => {
            SheetTitle::CantAddBadge
        }
    };

    BadgeCantBeAddedSheet {
        title,
        actions: vec![
            SheetAction { kind: SheetActionKind::ContactSupport, style: ActionStyle::Default },
            SheetAction { kind: SheetActionKind::NotNow, style: ActionStyle::Cancel },
        ],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportFilter {
    DonationsAndBadges,
}

/// Where "contact support" leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SupportAction {
    ComposeSupportRequest { filter: SupportFilter },
    /// Plain dialog with a single OK button, for devices that cannot send mail.
    FallbackAcknowledgement,
}

pub fn contact_support<M: SupportMailer + ?Sized>(mailer: &M) -> SupportAction {
    if mailer.can_send_emails() {
        SupportAction::ComposeSupportRequest { filter: SupportFilter::DonationsAndBadges }
    } else {
        info!("Mail composer unavailable; showing support fallback dialog");
        SupportAction::FallbackAcknowledgement
    }
}
