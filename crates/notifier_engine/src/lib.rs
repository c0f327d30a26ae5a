//! Notifier engine: HTTP adapters and the poll loop controller.
mod api;
mod poller;
mod telegram;

pub use api::{ApiError, ApiSettings, PracticumClient, StatusApi, DEFAULT_ENDPOINT};
pub use poller::{CycleError, EmptyPolicy, PollSettings, Poller};
pub use telegram::{MessageSender, SendError, TelegramSender};
