use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use tracing::warn;

use crate::error::{EventError, Result};
use crate::models::{CreateEvent, NewEvent};

/// Parses an ISO-8601 style date string into a UTC instant.
///
/// Accepts RFC 3339 (`2024-01-01T10:15:30Z`, `...+02:00`), naive date-times
/// which are read as UTC, and bare dates which resolve to midnight UTC.
pub fn parse_instant(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(date.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(EventError::Parse(input.to_string()))
}

pub struct EventValidator;

impl EventValidator {
    pub fn validate(payload: CreateEvent) -> Result<NewEvent> {
        Self::validate_at(payload, Utc::now())
    }

    /// Validates `payload`, using `now` for absent or unparseable dates.
    pub fn validate_at(payload: CreateEvent, now: DateTime<Utc>) -> Result<NewEvent> {
        let user = required(payload.user, "user")?;
        let event_type = required(payload.event_type, "type")?;
        let date = Self::resolve_date(payload.date.as_ref(), now);

        Ok(NewEvent {
            date,
            user,
            event_type,
            message: payload.message,
            otheruser: payload.otheruser,
        })
    }

    fn resolve_date(raw: Option<&Value>, now: DateTime<Utc>) -> DateTime<Utc> {
        match raw {
            None | Some(Value::Null) => now,
            Some(Value::String(s)) => match parse_instant(s) {
                Ok(date) => date,
                Err(err) => {
                    warn!("{}, using current time", err);
                    now
                }
            },
            Some(other) => {
                warn!("Non-string date {}, using current time", other);
                now
            }
        }
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(EventError::Validation(format!(
            "missing required field '{}'",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn payload(user: Option<&str>, event_type: Option<&str>, date: Option<Value>) -> CreateEvent {
        CreateEvent {
            date,
            user: user.map(String::from),
            event_type: event_type.map(String::from),
            message: None,
            otheruser: None,
        }
    }

    #[test]
    fn test_missing_user_rejected() {
        let result = EventValidator::validate_at(payload(None, Some("enter"), None), fixed_now());
        assert!(matches!(result, Err(EventError::Validation(msg)) if msg.contains("user")));
    }

    #[test]
    fn test_empty_type_rejected() {
        let result = EventValidator::validate_at(payload(Some("bob"), Some(""), None), fixed_now());
        assert!(matches!(result, Err(EventError::Validation(msg)) if msg.contains("type")));
    }

    #[test]
    fn test_absent_date_defaults_to_now() {
        let event =
            EventValidator::validate_at(payload(Some("bob"), Some("enter"), None), fixed_now())
                .unwrap();
        assert_eq!(event.date, fixed_now());
    }

    #[test]
    fn test_unparseable_date_defaults_to_now() {
        let event = EventValidator::validate_at(
            payload(Some("bob"), Some("enter"), Some(json!("not a date"))),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(event.date, fixed_now());

        let event = EventValidator::validate_at(
            payload(Some("bob"), Some("enter"), Some(json!(12345))),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(event.date, fixed_now());
    }

    #[test]
    fn test_supplied_date_is_kept() {
        let event = EventValidator::validate_at(
            payload(Some("bob"), Some("leave"), Some(json!("2024-01-01T10:15:30Z"))),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(event.date, Utc.with_ymd_and_hms(2024, 1, 1, 10, 15, 30).unwrap());
    }

    #[test]
    fn test_optional_fields_pass_through() {
        let mut body = payload(Some("bob"), Some("comment"), None);
        body.message = Some("hello".to_string());
        body.otheruser = Some("alice".to_string());

        let event = EventValidator::validate_at(body, fixed_now()).unwrap();
        assert_eq!(event.message.as_deref(), Some("hello"));
        assert_eq!(event.otheruser.as_deref(), Some("alice"));
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_instant("2024-01-01T10:00:00Z").unwrap(), expected);
        assert_eq!(parse_instant("2024-01-01T12:00:00+02:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-01-01T10:00:00.000").unwrap(), expected);
        assert_eq!(parse_instant("2024-01-01T10:00").unwrap(), expected);
        assert_eq!(
            parse_instant("2024-01-01").unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert!(matches!(parse_instant("yesterday"), Err(EventError::Parse(_))));
    }
}
