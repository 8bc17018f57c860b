// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for startup warnings and media errors.
//!
//! - [`notification`] - `Notification` with a severity and an i18n key
//! - [`manager`] - queue, expiry and dismissal
//! - [`toast`] - rendering in the bottom-right corner
//!
//! Warnings expire after a few seconds; errors stay until dismissed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::view_overlay;
