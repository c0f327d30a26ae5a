//! Notification text templates.
//!
//! The wording is part of the user-facing contract and must not drift; tests
//! pin the literal strings.

use std::fmt::Display;

use crate::response::HomeworkRecord;

/// Text announcing a review status change for a single homework.
pub fn status_changed(record: &HomeworkRecord) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.name,
        record.status.verdict()
    )
}

/// Diagnostic text for any failure caught at the cycle boundary.
pub fn failure(error: &impl Display) -> String {
    format!("Сбой работы программы: {error}")
}

/// Fallback text for an empty homework list, used by the notify-on-empty
/// policy. `from_date` is the cursor the empty period started at.
pub fn no_update(from_date: i64) -> String {
    format!("Нет обновлений статуса проверки с отметки {from_date}")
}
