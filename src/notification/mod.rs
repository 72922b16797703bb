//! Notification module for snipdeck
//!
//! Transient messages shown in the top-right corner, such as rename
//! confirmations or a config file that had to be ignored.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
