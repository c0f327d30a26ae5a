use std::time::Duration;

use notifier_core::{message, Dedup, HomeworkRecord, ResponseError, StatusReport};
use thiserror::Error;

use crate::api::{ApiError, StatusApi};
use crate::telegram::MessageSender;

/// Anything that can go wrong inside one poll cycle. Caught at the cycle
/// boundary and turned into a diagnostic notification.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Response(#[from] ResponseError),
}

/// What to do when the API reports no homework updates for the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Log and move on.
    #[default]
    LogOnly,
    /// Send the "no update since cursor" fallback text, deduplicated like
    /// any other notification.
    Notify,
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub chat_id: String,
    pub interval: Duration,
    pub empty_policy: EmptyPolicy,
}

/// Drives the fetch-validate-notify cycle.
///
/// Owns the poll cursor and the dedup state; both are mutated only from
/// within the cycle body. Steady-state errors never escape a cycle, so the
/// loop runs until the process is terminated from outside.
pub struct Poller<A, S> {
    api: A,
    sender: S,
    settings: PollSettings,
    cursor: i64,
    dedup: Dedup,
}

impl<A: StatusApi, S: MessageSender> Poller<A, S> {
    pub fn new(api: A, sender: S, settings: PollSettings, start_cursor: i64) -> Self {
        Self {
            api,
            sender,
            settings,
            cursor: start_cursor,
            dedup: Dedup::new(),
        }
    }

    /// The timestamp boundary the next fetch will use.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Polls forever. The sleep is unconditional, so the API is hit at most
    /// once per interval even across repeated failures.
    pub async fn run(&mut self) {
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.settings.interval).await;
        }
    }

    /// One fetch-validate-notify pass. Any error is converted into the
    /// diagnostic message and pushed through the same dedup-and-send path;
    /// the cursor stays put in that case.
    pub async fn run_cycle(&mut self) {
        if let Err(err) = self.poll_once().await {
            let text = message::failure(&err);
            log::error!("{text}");
            self.notify(&text).await;
        }
    }

    async fn poll_once(&mut self) -> Result<(), CycleError> {
        let body = self.api.fetch(self.cursor).await?;
        let report = StatusReport::from_value(body)?;

        // Newest update first; records past index 0 are never inspected.
        match report.homeworks.first() {
            Some(raw) => {
                let record = HomeworkRecord::from_value(raw)?;
                self.notify(&message::status_changed(&record)).await;
            }
            None => match self.settings.empty_policy {
                EmptyPolicy::LogOnly => {
                    log::info!("no status change since {}", self.cursor);
                }
                EmptyPolicy::Notify => {
                    self.notify(&message::no_update(self.cursor)).await;
                }
            },
        }

        self.cursor = report.current_date;
        Ok(())
    }

    /// Dedup-gated send. A failed delivery is logged and leaves the dedup
    /// state alone, so the same text is retried while the condition holds.
    async fn notify(&mut self, text: &str) {
        if !self.dedup.should_send(text) {
            log::debug!("suppressing repeat notification");
            return;
        }
        match self.sender.send(&self.settings.chat_id, text).await {
            Ok(()) => {
                log::debug!("sent notification: {text}");
                self.dedup.mark_sent(text);
            }
            Err(err) => {
                log::error!("failed to send \"{text}\": {err}");
            }
        }
    }
}
