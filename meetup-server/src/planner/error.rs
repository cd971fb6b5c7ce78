//! Planner error types.

use crate::domain::UnknownTag;

/// A recommendation request that must not reach the scoring engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    /// Group size outside the allowed range
    #[error("participant count must be between {min} and {max}, got {count}")]
    ParticipantCount { count: usize, min: usize, max: usize },

    /// Start station is not in the travel-time table
    #[error("unknown station: {0:?}")]
    UnknownStation(String),

    /// Preference tag is not in the vocabulary
    #[error(transparent)]
    UnknownTag(#[from] UnknownTag),
}

/// Error from the recommendation pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Request failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// Scoring needs at least one participant to divide by
    #[error("cannot score attractions for zero participants")]
    NoParticipants,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RequestError::ParticipantCount {
            count: 11,
            min: 2,
            max: 10,
        };
        assert_eq!(
            err.to_string(),
            "participant count must be between 2 and 10, got 11"
        );

        let err = RequestError::UnknownStation("Narnia".into());
        assert_eq!(err.to_string(), "unknown station: \"Narnia\"");

        let err: PlanError = RequestError::UnknownTag(UnknownTag("karaoke".into())).into();
        assert_eq!(
            err.to_string(),
            "invalid request: unknown preference tag: \"karaoke\""
        );

        assert_eq!(
            PlanError::NoParticipants.to_string(),
            "cannot score attractions for zero participants"
        );
    }
}
