use std::{str::FromStr, sync::OnceLock};

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{entities::PeriodKey, errors::InvalidPeriodKey};

fn period_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("hardcoded regex should be valid"))
}

impl FromStr for PeriodKey {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = period_key_pattern()
            .captures(s.trim())
            .ok_or_else(|| InvalidPeriodKey::new(s))?;
        let year: i32 = caps[1].parse().map_err(|e| InvalidPeriodKey::with_debug(s, &e))?;
        let month: u32 = caps[2].parse().map_err(|e| InvalidPeriodKey::with_debug(s, &e))?;
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(PeriodKey)
            .ok_or_else(|| InvalidPeriodKey::new(s))
    }
}

impl Serialize for PeriodKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    fn deserialize<D>(deserializer: D) -> Result<PeriodKey, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PeriodKey::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_year_month() {
        let key = PeriodKey::from_str("2024-02").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 2);
        assert_eq!(key.to_string(), "2024-02");
        assert_eq!(key.last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(key.previous().to_string(), "2024-01");
        assert_eq!(PeriodKey::from_str("2024-01").unwrap().previous().to_string(), "2023-12");
        assert_eq!(PeriodKey::from_str("2024-12").unwrap().next().to_string(), "2025-01");
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(PeriodKey::from_str("2024-13").is_err());
        assert!(PeriodKey::from_str("2024-00").is_err());
        assert!(PeriodKey::from_str("24-01").is_err());
        assert!(PeriodKey::from_str("2024/01").is_err());
    }

    #[test]
    fn serializes_as_string() {
        let key = PeriodKey::from_str("2023-07").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2023-07\"");
        let back: PeriodKey = serde_json::from_str("\"2023-07\"").unwrap();
        assert_eq!(back, key);
    }
}
