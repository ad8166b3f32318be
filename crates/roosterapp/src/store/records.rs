//! Per-kind validation and assembly.

use chrono::NaiveTime;

use super::{Record, Validated};
use crate::config::RoosterConfig;
use crate::identity::ResourceId;
use crate::model::{
    Alarm, NewAlarm, NewPodcast, NewRadioStation, Period, Podcast, RadioStation, ResourceKind,
};
use crate::validation::{
    check_alarm_url, check_alarm_volume, check_max_episodes, check_resource_url,
    check_update_interval, parse_alarm_time, ValidationResult,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AlarmFields {
    time: NaiveTime,
    period: Period,
    url: String,
    volume: u8,
    enabled: bool,
}

impl Record for Alarm {
    const KIND: ResourceKind = ResourceKind::Alarms;
    type Draft = NewAlarm;
    type Fields = AlarmFields;

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn validate(draft: NewAlarm, config: &RoosterConfig) -> ValidationResult<Validated<AlarmFields>> {
        let time = parse_alarm_time(&draft.time)?;
        let period = match draft.period.as_deref() {
            Some(p) => p.parse()?,
            None => Period::default(),
        };
        check_alarm_url(&draft.url)?;
        let volume = match draft.volume {
            Some(v) => check_alarm_volume(v)?,
            None => config.alarm_volume,
        };

        Ok(Validated {
            requested_id: draft.id,
            fields: AlarmFields {
                time,
                period,
                url: draft.url,
                volume,
                enabled: draft.enabled.unwrap_or(true),
            },
        })
    }

    fn assemble(id: ResourceId, fields: AlarmFields) -> Self {
        Alarm {
            id,
            time: fields.time,
            period: fields.period,
            url: fields.url,
            volume: fields.volume,
            enabled: fields.enabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PodcastFields {
    title: String,
    url: String,
    update_interval: u32,
    max_episodes: Option<u32>,
}

impl Record for Podcast {
    const KIND: ResourceKind = ResourceKind::Podcasts;
    type Draft = NewPodcast;
    type Fields = PodcastFields;

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn validate(
        draft: NewPodcast,
        config: &RoosterConfig,
    ) -> ValidationResult<Validated<PodcastFields>> {
        check_resource_url(&draft.url)?;
        let update_interval = match draft.update_interval {
            Some(seconds) => check_update_interval(seconds)?,
            None => config.podcast_update_interval,
        };
        let max_episodes = draft.max_episodes.map(check_max_episodes).transpose()?;

        Ok(Validated {
            requested_id: draft.id,
            fields: PodcastFields {
                title: draft.title.unwrap_or_default(),
                url: draft.url,
                update_interval,
                max_episodes,
            },
        })
    }

    fn assemble(id: ResourceId, fields: PodcastFields) -> Self {
        Podcast {
            id,
            title: fields.title,
            url: fields.url,
            update_interval: fields.update_interval,
            max_episodes: fields.max_episodes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationFields {
    name: String,
    url: String,
}

impl Record for RadioStation {
    const KIND: ResourceKind = ResourceKind::Radios;
    type Draft = NewRadioStation;
    type Fields = StationFields;

    fn id(&self) -> &ResourceId {
        &self.id
    }

    fn validate(
        draft: NewRadioStation,
        _config: &RoosterConfig,
    ) -> ValidationResult<Validated<StationFields>> {
        check_resource_url(&draft.url)?;
        Ok(Validated {
            requested_id: draft.id,
            fields: StationFields {
                name: draft.name.unwrap_or_default(),
                url: draft.url,
            },
        })
    }

    fn assemble(id: ResourceId, fields: StationFields) -> Self {
        RadioStation {
            id,
            name: fields.name,
            url: fields.url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn config() -> RoosterConfig {
        RoosterConfig::default()
    }

    #[test]
    fn test_alarm_defaults() {
        let draft = NewAlarm {
            time: "06:30".into(),
            url: "http://foo.bar/baz.mp3".into(),
            ..Default::default()
        };
        let validated = Alarm::validate(draft, &config()).unwrap();
        assert!(validated.requested_id.is_none());
        let alarm = Alarm::assemble(ResourceId::generate(), validated.fields);
        assert_eq!(alarm.period, Period::Daily);
        assert_eq!(alarm.volume, 30);
        assert!(alarm.enabled);
    }

    #[test]
    fn test_alarm_volume_from_config() {
        let config = RoosterConfig {
            alarm_volume: 12,
            ..Default::default()
        };
        let draft = NewAlarm::new("06:30", "once", "http://foo.bar/baz.mp3");
        let fields = Alarm::validate(draft, &config).unwrap().fields;
        assert_eq!(fields.volume, 12);
    }

    #[test]
    fn test_alarm_rejections() {
        let url = "http://foo.bar/baz.mp3";
        assert_eq!(
            Alarm::validate(NewAlarm::new("", "once", url), &config()).unwrap_err(),
            ValidationError::AlarmTime(String::new())
        );
        assert_eq!(
            Alarm::validate(NewAlarm::new("06:30", "weekly", url), &config()).unwrap_err(),
            ValidationError::AlarmPeriod("weekly".into())
        );
        assert_eq!(
            Alarm::validate(NewAlarm::new("06:30", "once", ""), &config()).unwrap_err(),
            ValidationError::AlarmUrl
        );
        assert_eq!(
            Alarm::validate(NewAlarm::new("06:30", "once", url).with_volume(101), &config())
                .unwrap_err(),
            ValidationError::AlarmVolume(101)
        );
    }

    #[test]
    fn test_alarm_keeps_requested_id() {
        let draft = NewAlarm::new("06:30", "daily", "http://foo.bar/baz.mp3").with_id("{abc}");
        // The id is only parsed later by the identity assigner.
        let validated = Alarm::validate(draft, &config()).unwrap();
        assert_eq!(validated.requested_id.as_deref(), Some("{abc}"));
    }

    #[test]
    fn test_podcast_defaults_and_caps() {
        let fields = Podcast::validate(NewPodcast::new("The Title", "foo://bar.baz"), &config())
            .unwrap()
            .fields;
        let podcast = Podcast::assemble(ResourceId::generate(), fields);
        assert_eq!(podcast.update_interval, 3600);
        assert_eq!(podcast.max_episodes, None);

        let fields = Podcast::validate(
            NewPodcast::new("t", "foo://bar.baz")
                .with_update_interval(1200)
                .with_max_episodes(5),
            &config(),
        )
        .unwrap()
        .fields;
        assert_eq!(fields.update_interval, 1200);
        assert_eq!(fields.max_episodes, Some(5));
    }

    #[test]
    fn test_podcast_rejections() {
        assert!(matches!(
            Podcast::validate(NewPodcast::new("Thomas", "Not An URL!"), &config()),
            Err(ValidationError::Url(_))
        ));
        assert!(matches!(
            Podcast::validate(NewPodcast::new("t", "foo://bar.baz").with_update_interval(0), &config()),
            Err(ValidationError::UpdateInterval(0))
        ));
        assert!(matches!(
            Podcast::validate(NewPodcast::new("t", "foo://bar.baz").with_max_episodes(-2), &config()),
            Err(ValidationError::MaxEpisodes(-2))
        ));
    }

    #[test]
    fn test_station() {
        let fields = RadioStation::validate(NewRadioStation::new("AName", "foo://bar.baz"), &config())
            .unwrap()
            .fields;
        let station = RadioStation::assemble(ResourceId::generate(), fields);
        assert_eq!(station.name, "AName");
        assert_eq!(station.url, "foo://bar.baz");

        assert!(RadioStation::validate(
            NewRadioStation::new("Thomas", "Not : # üß !an.url/"),
            &config()
        )
        .is_err());
    }

    #[test]
    fn test_station_name_defaults_to_empty() {
        let draft = NewRadioStation {
            url: "http://bar.baz".into(),
            ..Default::default()
        };
        let fields = RadioStation::validate(draft, &config()).unwrap().fields;
        assert_eq!(fields.name, "");
    }
}
