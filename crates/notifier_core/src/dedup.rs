/// The most recently delivered notification text.
///
/// Used to suppress repeats: identical consecutive conditions produce one
/// notification, not a flood. Advanced only after a confirmed send, so a
/// failed delivery is retried as long as the condition persists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dedup {
    last_sent: Option<String>,
}

impl Dedup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` differs from the last successfully sent notification.
    pub fn should_send(&self, text: &str) -> bool {
        self.last_sent.as_deref() != Some(text)
    }

    /// Records a confirmed delivery.
    pub fn mark_sent(&mut self, text: &str) {
        self.last_sent = Some(text.to_string());
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }
}
