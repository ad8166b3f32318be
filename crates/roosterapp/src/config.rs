//! # Configuration
//!
//! Server-side defaults for fields a caller may leave out of a create request.
//! Managed by [`confique`]; values resolve in priority order:
//!
//! 1. **Environment variables**: `ROOSTER_ALARM_VOLUME`, `ROOSTER_PODCAST_UPDATE_INTERVAL`.
//! 2. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `alarm_volume` | `30` | Volume of an alarm created without one (0-100) |
//! | `podcast_update_interval` | `3600` | Seconds between feed refreshes when unspecified |

use confique::Config;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ALARM_VOLUME: u8 = 30;
pub const DEFAULT_PODCAST_UPDATE_INTERVAL: u32 = 3600;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoosterConfig {
    /// Volume used for alarms created without one.
    #[config(env = "ROOSTER_ALARM_VOLUME", default = 30)]
    pub alarm_volume: u8,

    /// Refresh interval in seconds for podcasts created without one.
    #[config(env = "ROOSTER_PODCAST_UPDATE_INTERVAL", default = 3600)]
    pub podcast_update_interval: u32,
}

impl Default for RoosterConfig {
    fn default() -> Self {
        Self {
            alarm_volume: DEFAULT_ALARM_VOLUME,
            podcast_update_interval: DEFAULT_PODCAST_UPDATE_INTERVAL,
        }
    }
}

impl RoosterConfig {
    /// Compiled defaults overlaid with the `ROOSTER_*` environment.
    pub fn from_env() -> Result<Self, confique::Error> {
        let config = Self::builder().env().load()?;
        Ok(config.clamped())
    }

    /// Keeps the alarm volume inside the range alarms accept.
    pub fn clamped(mut self) -> Self {
        self.alarm_volume = self.alarm_volume.min(100);
        self.podcast_update_interval = self.podcast_update_interval.max(1);
        self
    }
}
