use serde_json::Value;
use thiserror::Error;

use crate::status::HomeworkStatus;

/// A violation of the review API's documented response shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("field `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("undocumented homework status `{0}`")]
    UnknownStatus(String),
}

/// Validated API response: homework records newest-first plus the next cursor.
///
/// Records are kept as raw values here; only the first one is ever parsed
/// further, since the API returns the most recent update at index 0.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

impl StatusReport {
    /// Single validation pass over the untrusted response body.
    ///
    /// An empty `homeworks` list is not an error; it means no update since
    /// the requested cursor.
    pub fn from_value(value: Value) -> Result<Self, ResponseError> {
        let Value::Object(mut map) = value else {
            return Err(ResponseError::TypeMismatch {
                field: "response",
                expected: "object",
            });
        };
        if !map.contains_key("homeworks") {
            return Err(ResponseError::MissingField("homeworks"));
        }
        if !map.contains_key("current_date") {
            return Err(ResponseError::MissingField("current_date"));
        }
        let homeworks = match map.remove("homeworks") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ResponseError::TypeMismatch {
                    field: "homeworks",
                    expected: "array",
                })
            }
        };
        let current_date = map
            .get("current_date")
            .and_then(Value::as_i64)
            .ok_or(ResponseError::TypeMismatch {
                field: "current_date",
                expected: "integer",
            })?;
        Ok(Self {
            homeworks,
            current_date,
        })
    }
}

/// A single homework record, validated from a raw list element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn from_value(value: &Value) -> Result<Self, ResponseError> {
        let Some(map) = value.as_object() else {
            return Err(ResponseError::TypeMismatch {
                field: "homework",
                expected: "object",
            });
        };
        let name = match map.get("homework_name") {
            None => return Err(ResponseError::MissingField("homework_name")),
            Some(raw) => raw
                .as_str()
                .ok_or(ResponseError::TypeMismatch {
                    field: "homework_name",
                    expected: "string",
                })?
                .to_string(),
        };
        let raw_status = match map.get("status") {
            None => return Err(ResponseError::MissingField("status")),
            Some(raw) => raw.as_str().ok_or(ResponseError::TypeMismatch {
                field: "status",
                expected: "string",
            })?,
        };
        let status = HomeworkStatus::parse(raw_status)
            .ok_or_else(|| ResponseError::UnknownStatus(raw_status.to_string()))?;
        Ok(Self { name, status })
    }
}
