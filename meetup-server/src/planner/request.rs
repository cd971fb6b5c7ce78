//! Validated recommendation requests.

use crate::domain::{PreferenceTag, Station};
use crate::travel_times::TravelTimeIndex;

use super::config::PlannerConfig;
use super::error::RequestError;

/// One person's start station and what they feel like doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub start: Station,
    pub tag: PreferenceTag,
}

impl Participant {
    /// Parse raw input, checking the station against the travel-time table.
    pub fn parse(station: &str, tag: &str, index: &TravelTimeIndex) -> Result<Self, RequestError> {
        let start = index
            .station(station)
            .cloned()
            .ok_or_else(|| RequestError::UnknownStation(station.to_string()))?;
        let tag = PreferenceTag::parse(tag)?;

        Ok(Self { start, tag })
    }
}

/// A group of participants whose size is within the configured limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendRequest {
    participants: Vec<Participant>,
}

impl RecommendRequest {
    /// Create a request, checking the group size.
    pub fn new(
        participants: Vec<Participant>,
        config: &PlannerConfig,
    ) -> Result<Self, RequestError> {
        check_participant_count(participants.len(), config)?;
        Ok(Self { participants })
    }

    /// Parse `(station, tag)` pairs into a request.
    ///
    /// The group size is checked first, then each pair in order; the first
    /// problem found is returned.
    pub fn parse<S: AsRef<str>, T: AsRef<str>>(
        pairs: &[(S, T)],
        index: &TravelTimeIndex,
        config: &PlannerConfig,
    ) -> Result<Self, RequestError> {
        check_participant_count(pairs.len(), config)?;

        let participants = pairs
            .iter()
            .map(|(station, tag)| Participant::parse(station.as_ref(), tag.as_ref(), index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { participants })
    }

    /// The participants, in input order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Start stations, one per participant.
    pub fn starts(&self) -> Vec<Station> {
        self.participants.iter().map(|p| p.start.clone()).collect()
    }

    /// Preference tags, one per participant.
    pub fn tags(&self) -> Vec<PreferenceTag> {
        self.participants.iter().map(|p| p.tag).collect()
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false for a validated request; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

/// Check a group size against the configured limits.
pub fn check_participant_count(count: usize, config: &PlannerConfig) -> Result<usize, RequestError> {
    if config.participants_in_range(count) {
        Ok(count)
    } else {
        Err(RequestError::ParticipantCount {
            count,
            min: config.min_participants,
            max: config.max_participants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnknownTag;
    use crate::travel_times::TravelTimeIndexBuilder;

    fn index() -> TravelTimeIndex {
        TravelTimeIndexBuilder::new()
            .station("台北車站")
            .station("西門")
            .station("中山")
            .build()
    }

    #[test]
    fn parse_participant() {
        let p = Participant::parse(" 西門 ", "咖啡廳", &index()).unwrap();
        assert_eq!(p.start.as_str(), "西門");
        assert_eq!(p.tag, PreferenceTag::Cafe);
    }

    #[test]
    fn unknown_station() {
        let err = Participant::parse("板橋", "cafe", &index()).unwrap_err();
        assert_eq!(err, RequestError::UnknownStation("板橋".into()));
    }

    #[test]
    fn unknown_tag() {
        let err = Participant::parse("西門", "karaoke", &index()).unwrap_err();
        assert_eq!(err, RequestError::UnknownTag(UnknownTag("karaoke".into())));
    }

    #[test]
    fn parse_request() {
        let pairs = [("西門", "walk"), ("中山", "夜市")];
        let request = RecommendRequest::parse(&pairs, &index(), &PlannerConfig::default()).unwrap();

        assert_eq!(request.len(), 2);
        assert_eq!(request.tags(), vec![PreferenceTag::Walk, PreferenceTag::NightMarket]);
        assert_eq!(
            request.starts(),
            vec![Station::parse("西門").unwrap(), Station::parse("中山").unwrap()]
        );
    }

    #[test]
    fn too_few_participants() {
        let pairs = [("西門", "walk")];
        let err = RecommendRequest::parse(&pairs, &index(), &PlannerConfig::default()).unwrap_err();
        assert_eq!(
            err,
            RequestError::ParticipantCount {
                count: 1,
                min: 2,
                max: 10
            }
        );
    }

    #[test]
    fn too_many_participants() {
        let pairs: Vec<(String, String)> = (0..11)
            .map(|_| ("西門".to_string(), "walk".to_string()))
            .collect();
        let err = RecommendRequest::parse(&pairs, &index(), &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, RequestError::ParticipantCount { count: 11, .. }));
    }

    #[test]
    fn count_checked_before_contents() {
        let pairs = [("nowhere", "nothing")];
        let err = RecommendRequest::parse(&pairs, &index(), &PlannerConfig::default()).unwrap_err();
        assert!(matches!(err, RequestError::ParticipantCount { .. }));
    }

    #[test]
    fn first_bad_pair_reported() {
        let pairs = [("西門", "walk"), ("板橋", "walk"), ("中山", "karaoke")];
        let err = RecommendRequest::parse(&pairs, &index(), &PlannerConfig::default()).unwrap_err();
        assert_eq!(err, RequestError::UnknownStation("板橋".into()));
    }

    #[test]
    fn new_checks_count() {
        let config = PlannerConfig::default();
        let p = Participant::parse("西門", "walk", &index()).unwrap();

        assert!(RecommendRequest::new(vec![p.clone()], &config).is_err());
        assert!(RecommendRequest::new(vec![p.clone(), p], &config).is_ok());
    }
}
