//! Meetup planner server.
//!
//! Answers: "We are starting from these MRT stations - which station is
//! fair for all of us, and what should we do once we get there?"

pub mod catalog;
pub mod cli;
pub mod dataset;
pub mod domain;
pub mod ingest;
pub mod planner;
pub mod present;
pub mod travel_times;
pub mod web;
