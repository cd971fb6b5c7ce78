//! Domain types for the meetup planner.
//!
//! This module contains the core domain model types: stations, preference
//! tags and attractions. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod attraction;
mod error;
mod station;
mod tag;

pub use attraction::{Attraction, LIST_SEPARATOR, PriceLevel, split_list};
pub use error::DomainError;
pub use station::{InvalidStation, Station};
pub use tag::{PreferenceTag, UnknownTag};
