//! Custom serde helpers for CLOB wire formats.

/// Deserializes optional Unix-millis timestamps into `DateTime<Utc>`.
///
/// The book endpoint sends `timestamp` as a string (`"1718123456789"`), some
/// proxies re-encode it as a number. Anything unparseable becomes `None`.
pub mod timestamp_ms_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        let millis = match raw {
            Some(Raw::Num(n)) => Some(n),
            Some(Raw::Str(s)) => s.trim().parse::<i64>().ok(),
            None => None,
        };
        Ok(millis.and_then(DateTime::<Utc>::from_timestamp_millis))
    }
}

/// Deserializes an optional f64 sent either as a JSON number or a numeric string.
pub mod f64_str_opt {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        let value = match raw {
            Some(Raw::Num(n)) => Some(n),
            Some(Raw::Str(s)) => s.trim().parse::<f64>().ok(),
            None => None,
        };
        Ok(value.filter(|v| v.is_finite()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, with = "super::timestamp_ms_opt")]
        ts: Option<DateTime<Utc>>,
        #[serde(default, with = "super::f64_str_opt")]
        tick: Option<f64>,
    }

    #[test]
    fn test_timestamp_accepts_string_and_number() {
        let a: Row = serde_json::from_str(r#"{"ts":"1700000000000"}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"ts":1700000000000}"#).unwrap();
        assert_eq!(a.ts, b.ts);
        assert_eq!(a.ts.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_garbage_becomes_none() {
        let p: Row = serde_json::from_str(r#"{"ts":"soon","tick":"wide"}"#).unwrap();
        assert!(p.ts.is_none());
        assert!(p.tick.is_none());

        let p: Row = serde_json::from_str("{}").unwrap();
        assert!(p.ts.is_none());
        assert!(p.tick.is_none());
    }

    #[test]
    fn test_f64_accepts_string_and_number() {
        let a: Row = serde_json::from_str(r#"{"tick":"0.01"}"#).unwrap();
        let b: Row = serde_json::from_str(r#"{"tick":0.01}"#).unwrap();
        assert_eq!(a.tick, Some(0.01));
        assert_eq!(b.tick, Some(0.01));
    }
}
