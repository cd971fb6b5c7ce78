//! Meeting point planner.
//!
//! This module implements the core decision engine that answers:
//! "We are starting from these stations - where should we meet, and what
//! should we do there?"
//!
//! The fair-station selector picks the meeting point(s) minimising the
//! longest trip, and the ranker scores the attractions around them.

mod config;
mod error;
mod fair;
mod rank;
mod recommend;
mod request;

pub use config::PlannerConfig;
pub use error::{PlanError, RequestError};
pub use fair::{FairStations, select_fair_stations, worst_case_minutes};
pub use rank::{
    ScoreBreakdown, ScoredAttraction, price_score, rank_attractions, rating_score, tag_score,
    walk_score,
};
pub use recommend::{Recommendation, Recommender};
pub use request::{Participant, RecommendRequest, check_participant_count};
