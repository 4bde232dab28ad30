use super::day_kind::DayKind;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One calendar day of the active cycle.
///
/// Stored as `{id, date, start, end}`; empty times are written as `""` so the
/// stored list keeps the same shape whether a day was worked or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String, // opaque, never reused
    pub date: String, // "YYYY-MM-DD"
    #[serde(default, with = "empty_as_none")]
    pub start: Option<String>, // "HH:MM"
    #[serde(default, with = "empty_as_none")]
    pub end: Option<String>, // "HH:MM"
    #[serde(default, skip_serializing_if = "DayKind::is_ordinary")]
    pub kind: DayKind,
}

impl DayRecord {
    /// Empty ordinary day for `date`.
    pub fn placeholder(id: String, date: NaiveDate) -> Self {
        Self {
            id,
            date: date.format("%Y-%m-%d").to_string(),
            start: None,
            end: None,
            kind: DayKind::Ordinary,
        }
    }

    pub fn start_str(&self) -> &str {
        self.start.as_deref().unwrap_or("")
    }

    pub fn end_str(&self) -> &str {
        self.end.as_deref().unwrap_or("")
    }

    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_end(&self) -> bool {
        self.end.is_some()
    }

    /// Both clock-in and clock-out are present.
    pub fn is_complete(&self) -> bool {
        self.has_start() && self.has_end()
    }

    /// Parsed date, if the stored string is still a valid ISO date.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Normalize a raw time value: empty means "not set".
pub fn time_value(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Ids written by older stores may be numeric (timestamps); keep them as text.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}
