//! Status-to-verdict mapping and notification formatting.

use crate::error::{Error, Result, ShapeError};
use serde_json::Value;

/// Message used when a record carries a null name or status, meaning the
/// submission has not reached review yet
pub const NOT_SUBMITTED_MESSAGE: &str = "Submission not yet turned in";

/// Review status of a homework submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// Review finished, work accepted
    Approved,
    /// Reviewer has taken the work for review
    Reviewing,
    /// Review finished, reviewer has remarks
    Rejected,
}

impl HomeworkStatus {
    /// Parses an API status code; returns `None` for codes outside the known set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict text for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Work has been reviewed: the reviewer liked everything. Hooray!",
            Self::Reviewing => "Work has been taken for review.",
            Self::Rejected => "Work has been reviewed: the reviewer has some remarks.",
        }
    }
}

/// Formats a homework record into the notification message.
///
/// A record with both keys present but either value null is not an error:
/// the submission simply has not been turned in, and the fallback message is
/// returned instead of a status-change notification.
///
/// # Errors
/// - [`Error::Shape`] if the record is not an object or lacks
///   `homework_name` / `status`
/// - [`Error::UnknownStatus`] if the status code is outside the known set
pub fn parse_status(record: &Value) -> Result<String> {
    let fields = record
        .as_object()
        .ok_or_else(|| ShapeError::wrong_type("object", record))?;

    let name = fields
        .get("homework_name")
        .ok_or(ShapeError::MissingKey("homework_name"))?;
    let status = fields
        .get("status")
        .ok_or(ShapeError::MissingKey("status"))?;

    if name.is_null() || status.is_null() {
        return Ok(NOT_SUBMITTED_MESSAGE.to_string());
    }

    let name = name
        .as_str()
        .ok_or_else(|| ShapeError::wrong_type("string", name))?;
    let code = status
        .as_str()
        .ok_or_else(|| ShapeError::wrong_type("string", status))?;

    let status =
        HomeworkStatus::from_code(code).ok_or_else(|| Error::UnknownStatus(code.to_string()))?;

    Ok(format!(
        "Changed review status of work \"{name}\". {}",
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approved_status_formats_the_documented_message() {
        let record = json!({"homework_name": "X", "status": "approved"});
        assert_eq!(
            parse_status(&record).unwrap(),
            "Changed review status of work \"X\". \
             Work has been reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn each_known_status_has_a_distinct_verdict() {
        let verdicts: Vec<&str> = ["approved", "reviewing", "rejected"]
            .iter()
            .map(|code| HomeworkStatus::from_code(code).unwrap().verdict())
            .collect();
        assert_eq!(verdicts.len(), 3);
        assert!(verdicts.iter().all(|v| !v.is_empty()));
        assert_ne!(verdicts[0], verdicts[1]);
        assert_ne!(verdicts[1], verdicts[2]);
    }

    #[test]
    fn missing_status_key_is_an_error() {
        let err = parse_status(&json!({"homework_name": "X"})).unwrap_err();
        assert!(matches!(err, Error::Shape(ShapeError::MissingKey("status"))));
    }

    #[test]
    fn missing_homework_name_key_is_an_error() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(
            err,
            Error::Shape(ShapeError::MissingKey("homework_name"))
        ));
    }

    #[test]
    fn unknown_status_code_is_an_error() {
        let record = json!({"homework_name": "X", "status": "unknown_code"});
        match parse_status(&record).unwrap_err() {
            Error::UnknownStatus(code) => assert_eq!(code, "unknown_code"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn null_name_or_status_yields_fallback_message_not_error() {
        let record = json!({"homework_name": null, "status": "approved"});
        assert_eq!(parse_status(&record).unwrap(), NOT_SUBMITTED_MESSAGE);

        let record = json!({"homework_name": "X", "status": null});
        assert_eq!(parse_status(&record).unwrap(), NOT_SUBMITTED_MESSAGE);
    }

    #[test]
    fn non_object_record_is_an_error() {
        let err = parse_status(&json!("just a string")).unwrap_err();
        assert!(matches!(
            err,
            Error::Shape(ShapeError::WrongType {
                expected: "object",
                ..
            })
        ));
    }
}
