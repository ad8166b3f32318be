//! # Resource Registry
//!
//! The registry owns one [`Collection`] per [`ResourceKind`] and routes each
//! operation to the right one. Collections are fully independent: the same
//! UUID may exist once as an alarm and once as a podcast, and a writer on one
//! kind never blocks readers of another.
//!
//! There is no global instance. Every caller (a server, the CLI, a test)
//! constructs its own registry, which starts empty; [`Registry::reset`] returns
//! an existing one to that state.
//!
//! Typed access goes through [`Registry::alarms`], [`Registry::podcasts`] and
//! [`Registry::radios`]. The kind-dispatched methods below trade static types
//! for the uniform [`Resource`] / [`ResourceDraft`] enums a boundary layer needs.

use crate::config::RoosterConfig;
use crate::error::Result;
use crate::model::{Alarm, Podcast, RadioStation, Resource, ResourceDraft, ResourceKind};
use crate::pagination::Window;
use crate::store::{Collection, Record};

pub struct Registry {
    config: RoosterConfig,
    alarms: Collection<Alarm>,
    podcasts: Collection<Podcast>,
    radios: Collection<RadioStation>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::with_config(RoosterConfig::default())
    }

    pub fn with_config(config: RoosterConfig) -> Self {
        Self {
            config,
            alarms: Collection::new(),
            podcasts: Collection::new(),
            radios: Collection::new(),
        }
    }

    pub fn config(&self) -> &RoosterConfig {
        &self.config
    }

    pub fn alarms(&self) -> &Collection<Alarm> {
        &self.alarms
    }

    pub fn podcasts(&self) -> &Collection<Podcast> {
        &self.podcasts
    }

    pub fn radios(&self) -> &Collection<RadioStation> {
        &self.radios
    }

    /// Creates a resource in the collection matching the draft's kind.
    pub fn create(&self, draft: impl Into<ResourceDraft>) -> Result<Resource> {
        let created = match draft.into() {
            ResourceDraft::Alarm(d) => self.alarms.create(d, &self.config)?.into(),
            ResourceDraft::Podcast(d) => self.podcasts.create(d, &self.config)?.into(),
            ResourceDraft::Radio(d) => self.radios.create(d, &self.config)?.into(),
        };
        Ok(created)
    }

    pub fn read_all(&self, kind: ResourceKind) -> Vec<Resource> {
        self.read_page(kind, &Window::all())
    }

    pub fn read_page(&self, kind: ResourceKind, window: &Window) -> Vec<Resource> {
        match kind {
            ResourceKind::Alarms => page(&self.alarms, window),
            ResourceKind::Podcasts => page(&self.podcasts, window),
            ResourceKind::Radios => page(&self.radios, window),
        }
    }

    pub fn read_one(&self, kind: ResourceKind, id: &str) -> Result<Resource> {
        match kind {
            ResourceKind::Alarms => self.alarms.read_one(id).map(Into::into),
            ResourceKind::Podcasts => self.podcasts.read_one(id).map(Into::into),
            ResourceKind::Radios => self.radios.read_one(id).map(Into::into),
        }
    }

    pub fn delete(&self, kind: ResourceKind, id: &str) -> Result<()> {
        match kind {
            ResourceKind::Alarms => self.alarms.delete(id),
            ResourceKind::Podcasts => self.podcasts.delete(id),
            ResourceKind::Radios => self.radios.delete(id),
        }
    }

    pub fn len(&self, kind: ResourceKind) -> usize {
        match kind {
            ResourceKind::Alarms => self.alarms.len(),
            ResourceKind::Podcasts => self.podcasts.len(),
            ResourceKind::Radios => self.radios.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        ResourceKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }

    /// Empties every collection.
    pub fn reset(&self) {
        self.alarms.clear();
        self.podcasts.clear();
        self.radios.clear();
        tracing::debug!("registry reset");
    }
}

fn page<R: Record>(collection: &Collection<R>, window: &Window) -> Vec<Resource> {
    collection
        .read_page(window)
        .into_iter()
        .map(Into::into)
        .collect()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{NewAlarm, NewPodcast, NewRadioStation};
    use crate::seed::{self, SeedDocument};

    /// Resources the appliance ships with in its API test setup.
    pub const APPLIANCE_SEED: &str = r#"{
        "Alarms": [
            {
                "enabled": true,
                "id": "8364287c-3036-4cd0-b243-0a4f5dd863ae",
                "period": "workdays",
                "time": "06:30",
                "url": "http://st01.dlf.de/dlf/01/128/mp3/stream.mp3",
                "volume": 25
            },
            {
                "enabled": false,
                "id": "30df096e-f776-404c-8619-3c4c2c4da212",
                "period": "once",
                "time": "07:00",
                "url": "http://st01.dlf.de/dlf/01/128/mp3/stream.mp3",
                "volume": 40
            },
            {
                "enabled": true,
                "id": "e0fcc26f-fc55-4346-ab08-c0673cbf6184",
                "period": "daily",
                "time": "14:20",
                "url": "http://st01.dlf.de/dlf/01/128/mp3/stream.mp3",
                "volume": 25
            }
        ],
        "InternetRadio": [
            {
                "id": "0a2152ef-da4f-4f26-8a77-078193da536e",
                "name": "BBC Radio 4",
                "url": "http://bbcwssc.ic.llnwd.net/stream/bbcwssc_mp1_ws-eieuk"
            },
            {
                "id": "{09be8e85-a9d3-4db8-b2c5-02e3eb3ff66d}",
                "name": "Deutschlandfunk",
                "url": "https://st01.sslstream.dlf.de/dlf/01/128/mp3/stream.mp3"
            }
        ],
        "Podcasts": [
            {
                "id": "{61f6bcda-0334-49a7-bfe9-b206b9f0bef7}",
                "title": "Alternativlos",
                "updateInterval": 3600,
                "url": "https://alternativlos.org/alternativlos.rss"
            },
            {
                "id": "{6d2ebae6-d961-411d-aecc-7820d1be1650}",
                "title": "Arms Control Wonk",
                "updateInterval": 1200,
                "url": "http://armscontrolwonk.libsyn.com/rss"
            }
        ],
        "volume": 25
    }"#;

    /// An id no fixture uses.
    pub const UNKNOWN_ID: &str = "c0ffee00-404c-f776-8619-3c4c2c4da212";

    pub struct RegistryFixture {
        pub registry: Registry,
    }

    impl Default for RegistryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RegistryFixture {
        pub fn new() -> Self {
            Self {
                registry: Registry::new(),
            }
        }

        /// Three alarms, two podcasts and two stations.
        pub fn appliance() -> Self {
            let fixture = Self::new();
            let doc = SeedDocument::from_json(APPLIANCE_SEED).unwrap();
            seed::load(&fixture.registry, doc);
            fixture
        }

        pub fn with_alarms(self, count: usize) -> Self {
            for i in 0..count {
                let time = format!("{:02}:{:02}", (6 + i) % 24, (i * 5) % 60);
                self.registry
                    .create(NewAlarm::new(time, "daily", "http://foo.bar/baz.mp3"))
                    .unwrap();
            }
            self
        }

        pub fn with_podcasts(self, count: usize) -> Self {
            for i in 0..count {
                self.registry
                    .create(NewPodcast::new(
                        format!("Podcast {}", i + 1),
                        format!("https://feeds.example.org/{}.rss", i + 1),
                    ))
                    .unwrap();
            }
            self
        }

        pub fn with_radios(self, count: usize) -> Self {
            for i in 0..count {
                self.registry
                    .create(NewRadioStation::new(
                        format!("Station {}", i + 1),
                        format!("http://streams.example.org/{}.mp3", i + 1),
                    ))
                    .unwrap();
            }
            self
        }
    }
}
