use std::time::Duration;

pub type NotificationId = u64;

/// How long a notification stays on screen unless dismissed.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub text: String,
}
