use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NotificationID(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationID,
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Auto-dismissing messages shown on top of the page.
#[derive(Debug, Clone)]
pub struct Notifications {
    lifetime: TimeDelta,
    next_id: u64,
    notifications: Vec<Notification>,
}

impl Notifications {
    #[must_use]
    pub fn new(lifetime: TimeDelta) -> Self {
        Self {
            lifetime,
            next_id: 0,
            notifications: vec![],
        }
    }

    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> NotificationID {
        let id = NotificationID(self.next_id);
        self.next_id += 1;
        self.notifications.push(Notification {
            id,
            message: message.into(),
            kind,
            expires_at: now + self.lifetime,
        });
        id
    }

    /// Removes the notification before it expires. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NotificationID) -> bool {
        let len = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != len
    }

    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    #[must_use]
    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(crate::Settings::default().notification_lifetime())
    }
}
