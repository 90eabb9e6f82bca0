//! Entity schemas: stored records, their insertable shapes, and partial-update patches.
//!
//! Every record carries a storage-assigned `id`. Insert shapes omit it; patch shapes make every
//! field optional so an update only touches the fields the client sent.

pub mod directory;
pub mod news;
pub mod resource;
pub mod service;
pub mod statistic;
pub mod user;

pub use directory::{Directory, DirectoryPatch, InsertDirectory};
pub use news::{InsertNews, News, NewsPatch};
pub use resource::{InsertResource, Resource, ResourcePatch};
pub use service::{InsertService, Service, ServicePatch};
pub use statistic::{InsertStatistic, Statistic, StatisticPatch};
pub use user::{InsertUser, User};

use serde::{Deserialize, Deserializer};

/// Storage-assigned identifier.
pub type Id = i32;

/// Pre-id shape that becomes a stored record once storage picks an id.
pub trait Insertable {
    type Record;

    fn with_id(self, id: Id) -> Self::Record;
}

/// Shallow merge of a partial update over an existing record.
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);
}

pub(crate) fn default_true() -> bool {
    true
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]` so absence falls back to `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrite `slot` when the patch carried a value.
pub(crate) fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// `publishDate` accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates (midnight UTC), and is
/// written back as RFC 3339 UTC with millisecond precision (`2025-11-02T00:00:00.000Z`).
pub(crate) mod timestamp {
    use chrono::{DateTime, NaiveDate, SecondsFormat, TimeZone, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn parse(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| format!("invalid timestamp '{}'", raw))?;
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| format!("invalid timestamp '{}'", raw))?;
        Ok(Utc.from_utc_datetime(&midnight))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
