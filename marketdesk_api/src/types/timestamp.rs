use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A point in time as the backend sends it.
///
/// Different endpoints disagree on the wire form: some send Unix seconds as
/// a bare number, others an ISO-8601 string. Display code branches on the
/// variant, mirroring the `typeof` check the endpoints force on clients.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Timestamp {
    UnixSeconds(i64),
    Iso(String),
}

impl Timestamp {
    /// Resolves to a UTC datetime, or `None` for an out-of-range number or
    /// an unparseable string.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::UnixSeconds(secs) => DateTime::from_timestamp(*secs, 0),
            Timestamp::Iso(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unix_seconds() {
        let ts: Timestamp = serde_json::from_str("1714521600").unwrap();
        assert_eq!(ts, Timestamp::UnixSeconds(1714521600));
        assert!(ts.to_datetime().is_some());
    }

    #[test]
    fn decodes_iso_string() {
        let ts: Timestamp = serde_json::from_str("\"2024-05-01T00:00:00Z\"").unwrap();
        assert_eq!(ts, Timestamp::Iso("2024-05-01T00:00:00Z".to_string()));
        assert_eq!(
            ts.to_datetime().unwrap(),
            Timestamp::UnixSeconds(1714521600).to_datetime().unwrap()
        );
    }

    #[test]
    fn unparseable_string_resolves_to_none() {
        let ts = Timestamp::Iso("not a date".to_string());
        assert!(ts.to_datetime().is_none());
    }
}
