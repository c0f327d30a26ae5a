//! Notifier core: response validation, verdict mapping and dedup state.
mod dedup;
pub mod message;
mod response;
mod status;

pub use dedup::Dedup;
pub use response::{HomeworkRecord, ResponseError, StatusReport};
pub use status::HomeworkStatus;
