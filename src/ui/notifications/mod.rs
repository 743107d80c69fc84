// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! - [`notification`]: `Notification` and its `Severity`
//! - [`manager`]: queuing and auto-dismiss
//! - [`toast`]: rendering
//!
//! Info toasts disappear after 3 s, warnings after 5 s, errors stay until
//! dismissed. At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
