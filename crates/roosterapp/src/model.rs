//! # Domain Model
//!
//! Three kinds of resources live in the registry:
//!
//! - [`Alarm`]: a wake-up time, a repeat [`Period`] and the stream to play
//! - [`Podcast`]: a feed the appliance polls for new episodes
//! - [`RadioStation`]: an internet radio stream
//!
//! Each kind comes in two shapes. The stored record (`Alarm`, `Podcast`,
//! `RadioStation`) is strongly typed and always carries a [`ResourceId`]. The
//! draft (`NewAlarm`, `NewPodcast`, `NewRadioStation`) is what a caller sends to
//! create one: raw strings and optional numbers, exactly as they arrive from a
//! request body, with the id optional. Drafts become records only through
//! validation (see [`crate::store::records`]).
//!
//! ## Wire Names
//!
//! Field names follow the REST contract: `updateInterval` and `maxEpisodes`
//! are camel case, everything else is a single word. `maxEpisodes` is left out
//! when unset.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::ResourceId;
use crate::validation::ValidationError;

/// Selects one of the registry's collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Alarms,
    Podcasts,
    Radios,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Alarms,
        ResourceKind::Podcasts,
        ResourceKind::Radios,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Alarms => "alarms",
            ResourceKind::Podcasts => "podcasts",
            ResourceKind::Radios => "radios",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resource kind '{0}' (expected alarms, podcasts or radios)")]
pub struct ParseKindError(pub String);

impl FromStr for ResourceKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alarms" | "alarm" => Ok(ResourceKind::Alarms),
            "podcasts" | "podcast" => Ok(ResourceKind::Podcasts),
            "radios" | "radio" | "iradio" | "internet-radio" | "stations" => {
                Ok(ResourceKind::Radios)
            }
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// How often an alarm repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Once,
    #[default]
    Daily,
    Workdays,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Once => "once",
            Period::Daily => "daily",
            Period::Workdays => "workdays",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "once" => Ok(Period::Once),
            "daily" => Ok(Period::Daily),
            "workdays" => Ok(Period::Workdays),
            _ => Err(ValidationError::AlarmPeriod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: ResourceId,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub period: Period,
    pub url: String,
    pub volume: u8,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Podcast {
    pub id: ResourceId,
    pub title: String,
    pub url: String,
    pub update_interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_episodes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStation {
    pub id: ResourceId,
    pub name: String,
    pub url: String,
}

/// Create request for an [`Alarm`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewAlarm {
    pub id: Option<String>,
    pub time: String,
    pub period: Option<String>,
    pub url: String,
    pub volume: Option<i64>,
    pub enabled: Option<bool>,
}

impl NewAlarm {
    pub fn new(time: impl Into<String>, period: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            period: Some(period.into()),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_volume(mut self, volume: i64) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }
}

/// Create request for a [`Podcast`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewPodcast {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: String,
    pub update_interval: Option<i64>,
    pub max_episodes: Option<i64>,
}

impl NewPodcast {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_update_interval(mut self, seconds: i64) -> Self {
        self.update_interval = Some(seconds);
        self
    }

    pub fn with_max_episodes(mut self, max: i64) -> Self {
        self.max_episodes = Some(max);
        self
    }
}

/// Create request for a [`RadioStation`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NewRadioStation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: String,
}

impl NewRadioStation {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A stored resource of any kind. Serializes as the bare record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resource {
    Alarm(Alarm),
    Podcast(Podcast),
    Radio(RadioStation),
}

impl Resource {
    pub fn id(&self) -> &ResourceId {
        match self {
            Resource::Alarm(a) => &a.id,
            Resource::Podcast(p) => &p.id,
            Resource::Radio(r) => &r.id,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Alarm(_) => ResourceKind::Alarms,
            Resource::Podcast(_) => ResourceKind::Podcasts,
            Resource::Radio(_) => ResourceKind::Radios,
        }
    }
}

impl From<Alarm> for Resource {
    fn from(alarm: Alarm) -> Self {
        Resource::Alarm(alarm)
    }
}

impl From<Podcast> for Resource {
    fn from(podcast: Podcast) -> Self {
        Resource::Podcast(podcast)
    }
}

impl From<RadioStation> for Resource {
    fn from(station: RadioStation) -> Self {
        Resource::Radio(station)
    }
}

/// A create request of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceDraft {
    Alarm(NewAlarm),
    Podcast(NewPodcast),
    Radio(NewRadioStation),
}

impl ResourceDraft {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceDraft::Alarm(_) => ResourceKind::Alarms,
            ResourceDraft::Podcast(_) => ResourceKind::Podcasts,
            ResourceDraft::Radio(_) => ResourceKind::Radios,
        }
    }

    /// Reads a request body as the draft type `kind` expects.
    pub fn from_value(kind: ResourceKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            ResourceKind::Alarms => ResourceDraft::Alarm(serde_json::from_value(value)?),
            ResourceKind::Podcasts => ResourceDraft::Podcast(serde_json::from_value(value)?),
            ResourceKind::Radios => ResourceDraft::Radio(serde_json::from_value(value)?),
        })
    }

    pub fn from_json(kind: ResourceKind, body: &str) -> serde_json::Result<Self> {
        Self::from_value(kind, serde_json::from_str(body)?)
    }
}

impl From<NewAlarm> for ResourceDraft {
    fn from(draft: NewAlarm) -> Self {
        ResourceDraft::Alarm(draft)
    }
}

impl From<NewPodcast> for ResourceDraft {
    fn from(draft: NewPodcast) -> Self {
        ResourceDraft::Podcast(draft)
    }
}

impl From<NewRadioStation> for ResourceDraft {
    fn from(draft: NewRadioStation) -> Self {
        ResourceDraft::Radio(draft)
    }
}

/// `HH:MM` (de)serialization for alarm times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        crate::validation::parse_alarm_time(&text).map_err(serde::de::Error::custom)
    }
}
