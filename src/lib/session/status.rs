use std::time::{Duration, Instant};

use crate::utils::constants::status;

/// A transient, single line message. It owns its own expiry: once the TTL elapsed since
/// the last [`StatusLine::show`], the line reads as empty
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: Option<String>,
    expires_at: Option<Instant>,
    ttl: Duration,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::with_ttl(status::TTL)
    }
}

impl StatusLine {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            message: None,
            expires_at: None,
            ttl,
        }
    }

    /// Replaces the current message, rescheduling the clear
    pub fn show(&mut self, message: &str, now: Instant) {
        log::info!("{message}");
        self.message = Some(truncate(message));
        self.expires_at = Some(now + self.ttl);
    }

    pub fn visible(&self, now: Instant) -> Option<&str> {
        match self.expires_at {
            Some(deadline) if now < deadline => self.message.as_deref(),
            _ => None,
        }
    }

    /// When the line will clear itself, if something is being shown
    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Drops an expired message. Returns whether something was cleared, so the front
    /// end knows that it has to redraw
    pub fn clear_if_expired(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.message = None;
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }
}

/// Cuts `message` to fit on the status line
pub fn truncate(message: &str) -> String {
    if message.chars().count() <= status::MAX_WIDTH {
        return message.to_string();
    }
    let kept: String = message
        .chars()
        .take(status::MAX_WIDTH - status::ELLIPSIS.len())
        .collect();
    format!("{kept}{}", status::ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_clears_after_the_ttl() {
        let start = Instant::now();
        let mut line = StatusLine::with_ttl(Duration::from_secs(2));

        line.show("Project created", start);
        assert_eq!(line.visible(start), Some("Project created"));
        assert_eq!(line.visible(start + Duration::from_millis(1999)), Some("Project created"));
        assert_eq!(line.visible(start + Duration::from_secs(2)), None);

        assert!(!line.clear_if_expired(start + Duration::from_secs(1)));
        assert!(line.clear_if_expired(start + Duration::from_secs(3)));
        assert_eq!(line.expires_at(), None);
    }

    #[test]
    fn test_new_message_reschedules_the_clear() {
        let start = Instant::now();
        let mut line = StatusLine::with_ttl(Duration::from_secs(2));

        line.show("first", start);
        line.show("second", start + Duration::from_secs(1));

        assert_eq!(line.visible(start + Duration::from_millis(2500)), Some("second"));
        assert_eq!(line.expires_at(), Some(start + Duration::from_secs(3)));
    }

    #[test]
    fn test_long_messages_are_truncated() {
        let exact = "x".repeat(50);
        assert_eq!(truncate(&exact), exact);

        let long = "y".repeat(80);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), 50);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"y".repeat(47)));
    }
}
