use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    shown_at: Instant,
}

/// Transient notifications, oldest first.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, now: Instant) {
        let toast = Toast {
            title: title.into(),
            description: description.into(),
            shown_at: now,
        };
        log::info!("Notification: {} - {}", toast.title, toast.description);
        self.items.push(toast);
    }

    /// Drops expired toasts and returns how long until the next one expires.
    pub fn prune(&mut self, now: Instant) -> Option<Duration> {
        let lifetime = self.lifetime;
        self.items
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
        self.items
            .iter()
            .map(|toast| lifetime.saturating_sub(now.saturating_duration_since(toast.shown_at)))
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let start = Instant::now();
        let mut toasts = Toasts::new(Duration::from_secs(4));
        toasts.push("Settings saved", "", start);
        toasts.push("Upload completed", "", start + Duration::from_secs(2));

        let next = toasts.prune(start + Duration::from_secs(3));
        assert_eq!(toasts.len(), 2);
        assert_eq!(next, Some(Duration::from_secs(1)));

        toasts.prune(start + Duration::from_secs(5));
        let titles: Vec<_> = toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Upload completed"]);

        assert_eq!(toasts.prune(start + Duration::from_secs(6)), None);
        assert!(toasts.is_empty());
    }
}
