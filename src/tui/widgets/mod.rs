//! Reusable widgets for the TUI

pub mod input;
pub mod notification;

pub use input::TextInput;
pub use notification::{
    notification_area, Notification, NotificationKind, NotificationQueue, NotificationWidget,
};
