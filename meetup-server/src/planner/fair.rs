//! Min-max fair meeting station selection.
//!
//! A station is fair when the longest trip any participant has to make to
//! reach it is as short as possible. Ties are all reported.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::domain::Station;
use crate::travel_times::TravelTimeIndex;

/// The fairest meeting stations and the worst-case trip to reach them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FairStations {
    /// Every candidate achieving the bound, in candidate order.
    pub stations: Vec<Station>,

    /// Longest trip (minutes) any participant makes to a fair station.
    /// Zero when `stations` is empty.
    pub bound_mins: u32,
}

impl FairStations {
    /// The "no station is reachable by everyone" outcome.
    pub fn none() -> Self {
        Self {
            stations: Vec::new(),
            bound_mins: 0,
        }
    }

    /// Whether no fair station exists.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station names joined for display.
    pub fn joined(&self, separator: &str) -> String {
        self.stations
            .iter()
            .map(Station::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Longest trip from any of `starts` to `target`.
///
/// Returns `None` if some start has no defined time to `target`. With no
/// starts the longest trip is zero.
pub fn worst_case_minutes(
    starts: &[Station],
    index: &TravelTimeIndex,
    target: &Station,
) -> Option<u32> {
    starts
        .iter()
        .try_fold(0u32, |worst, start| Some(worst.max(index.get(start, target)?)))
}

/// Pick the candidate stations minimising the worst-case trip from `starts`.
///
/// Candidates some start cannot reach are disqualified. If every candidate
/// is disqualified the result is empty with a bound of zero.
pub fn select_fair_stations(
    starts: &[Station],
    index: &TravelTimeIndex,
    candidates: &[Station],
) -> FairStations {
    let mut seen = HashSet::with_capacity(candidates.len());
    let worst_cases: Vec<(&Station, Option<u32>)> = candidates
        .iter()
        .filter(|c| seen.insert(*c))
        .map(|target| (target, worst_case_minutes(starts, index, target)))
        .collect();

    let Some(bound_mins) = worst_cases.iter().filter_map(|(_, worst)| *worst).min() else {
        debug!(
            candidates = candidates.len(),
            "no candidate reachable from every start"
        );
        return FairStations::none();
    };

    let stations: Vec<Station> = worst_cases
        .into_iter()
        .filter(|(_, worst)| *worst == Some(bound_mins))
        .map(|(station, _)| station.clone())
        .collect();

    debug!(bound_mins, fair = stations.len(), "selected fair stations");

    FairStations {
        stations,
        bound_mins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::travel_times::TravelTimeIndexBuilder;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn stations(names: &[&str]) -> Vec<Station> {
        names.iter().map(|n| station(n)).collect()
    }

    #[test]
    fn two_user_scenario() {
        let index = TravelTimeIndexBuilder::new()
            .time("A", "C", 5)
            .time("B", "C", 5)
            .time("A", "D", 3)
            .time("B", "D", 10)
            .build();

        let result = select_fair_stations(&stations(&["A", "B"]), &index, &stations(&["C", "D"]));

        assert_eq!(result.stations, stations(&["C"]));
        assert_eq!(result.bound_mins, 5);
    }

    #[test]
    fn ties_reported_together() {
        let index = TravelTimeIndexBuilder::new()
            .time("A", "X", 4)
            .time("B", "X", 2)
            .time("A", "Y", 1)
            .time("B", "Y", 4)
            .time("A", "Z", 4)
            .time("B", "Z", 5)
            .build();

        let result = select_fair_stations(
            &stations(&["A", "B"]),
            &index,
            &stations(&["X", "Y", "Z"]),
        );

        assert_eq!(result.stations, stations(&["X", "Y"]));
        assert_eq!(result.bound_mins, 4);
    }

    #[test]
    fn undefined_pair_disqualifies_target() {
        // D would win on time, but B cannot reach it.
        let index = TravelTimeIndexBuilder::new()
            .time("A", "C", 9)
            .time("B", "C", 9)
            .time("A", "D", 1)
            .station("D")
            .build();

        let result = select_fair_stations(&stations(&["A", "B"]), &index, &stations(&["C", "D"]));

        assert_eq!(result.stations, stations(&["C"]));
        assert_eq!(result.bound_mins, 9);
    }

    #[test]
    fn all_disqualified_is_empty_with_zero_bound() {
        let index = TravelTimeIndexBuilder::new()
            .time("A", "C", 1)
            .time("B", "D", 1)
            .build();

        let result = select_fair_stations(&stations(&["A", "B"]), &index, &stations(&["C", "D"]));

        assert!(result.is_empty());
        assert_eq!(result, FairStations::none());
    }

    #[test]
    fn unknown_candidate_disqualified() {
        let index = TravelTimeIndexBuilder::new().time("A", "C", 2).build();

        let result = select_fair_stations(&stations(&["A"]), &index, &stations(&["Q", "C"]));

        assert_eq!(result.stations, stations(&["C"]));
    }

    #[test]
    fn duplicate_candidates_reported_once() {
        let index = TravelTimeIndexBuilder::new().time("A", "C", 2).build();

        let result = select_fair_stations(&stations(&["A"]), &index, &stations(&["C", "C"]));

        assert_eq!(result.stations, stations(&["C"]));
    }

    #[test]
    fn repeated_start_counts_once_for_worst_case() {
        let index = TravelTimeIndexBuilder::new()
            .time("A", "C", 3)
            .time("B", "C", 7)
            .build();

        assert_eq!(
            worst_case_minutes(&stations(&["A", "A", "B"]), &index, &station("C")),
            Some(7)
        );
    }

    #[test]
    fn no_starts_means_zero_worst_case() {
        let index = TravelTimeIndexBuilder::new().station("C").build();
        assert_eq!(worst_case_minutes(&[], &index, &station("C")), Some(0));
    }

    #[test]
    fn no_candidates() {
        let index = TravelTimeIndexBuilder::new().time("A", "C", 2).build();
        assert!(select_fair_stations(&stations(&["A"]), &index, &[]).is_empty());
    }

    #[test]
    fn joined_display() {
        let fair = FairStations {
            stations: stations(&["西門", "中山"]),
            bound_mins: 6,
        };
        assert_eq!(fair.joined(", "), "西門, 中山");
    }
}
