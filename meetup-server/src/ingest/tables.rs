//! CSV table parsing.

use std::collections::HashSet;

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::AttractionCatalog;
use crate::domain::{Attraction, Station};
use crate::travel_times::TravelTimeIndex;

use super::error::LoadError;

const TRAVEL_TABLE: &str = "travel-time";
const ATTRACTION_TABLE: &str = "attraction";

/// A single row of the attraction table, before numeric coercion.
#[derive(Debug, Deserialize)]
struct AttractionRow {
    name: String,
    mrt_station: String,
    walk_min: String,
    rating: String,
    price_level: String,
    tags: String,
}

/// Parse the travel-time table.
///
/// The header's first cell is a label and is ignored; the remaining header
/// cells name target stations. Each row starts with its origin station.
/// Empty cells (and cells missing from short rows) are undefined.
pub fn parse_travel_times(text: &str) -> Result<TravelTimeIndex, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(LoadError::csv(TRAVEL_TABLE))?.clone();
    if headers.len() < 2 {
        return Err(LoadError::malformed(
            TRAVEL_TABLE,
            "needs a station column and at least one target column",
        ));
    }

    let mut columns = Vec::with_capacity(headers.len() - 1);
    for name in headers.iter().skip(1) {
        let station = Station::parse(name)
            .map_err(|_| LoadError::malformed(TRAVEL_TABLE, "blank target column header"))?;
        if columns.contains(&station) {
            return Err(LoadError::malformed(
                TRAVEL_TABLE,
                format!("target column {station} appears more than once"),
            ));
        }
        columns.push(station);
    }

    let mut rows: Vec<(Station, Vec<Option<u32>>)> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(LoadError::csv(TRAVEL_TABLE))?;
        if record.len() > headers.len() {
            return Err(LoadError::malformed(
                TRAVEL_TABLE,
                format!("row {:?} has more cells than the header", record.get(0)),
            ));
        }

        let origin = Station::parse(record.get(0).unwrap_or_default())
            .map_err(|_| LoadError::malformed(TRAVEL_TABLE, "row with blank station name"))?;

        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, target)| {
                let raw = record.get(i + 1).unwrap_or_default();
                parse_minutes(raw).ok_or_else(|| {
                    LoadError::malformed(
                        TRAVEL_TABLE,
                        format!("invalid minutes {raw:?} from {origin} to {target}"),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push((origin, cells));
    }

    if rows.is_empty() {
        return Err(LoadError::malformed(TRAVEL_TABLE, "table has no rows"));
    }

    let column_set: HashSet<&Station> = columns.iter().collect();
    if let Some((missing, _)) = rows.iter().find(|(origin, _)| !column_set.contains(origin)) {
        return Err(LoadError::malformed(
            TRAVEL_TABLE,
            format!("station {missing} has a row but no column"),
        ));
    }

    let mut index = TravelTimeIndex::new(rows.iter().map(|(origin, _)| origin.clone()).collect())?;

    for target in columns.iter().filter(|c| !index.contains(c)) {
        warn!(station = %target, "ignoring travel-time column with no matching row");
    }

    for (origin, cells) in &rows {
        for (target, minutes) in columns.iter().zip(cells) {
            if let Some(minutes) = minutes {
                index.set(origin, target, *minutes);
            }
        }
    }

    debug!(
        stations = index.len(),
        defined = index.defined_count(),
        "parsed travel-time table"
    );

    Ok(index)
}

/// Parse a travel-time cell.
///
/// Returns `Some(None)` for an empty cell, `None` for anything that is not
/// a non-negative whole number of minutes.
fn parse_minutes(raw: &str) -> Option<Option<u32>> {
    if raw.is_empty() {
        return Some(None);
    }
    if let Ok(minutes) = raw.parse::<u32>() {
        return Some(Some(minutes));
    }

    // Spreadsheet exports sometimes write whole numbers as "5.0".
    let value = raw.parse::<f64>().ok()?;
    let whole = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
    (whole && value <= u32::MAX as f64).then_some(Some(value as u32))
}

/// Parse the attraction table.
///
/// Rows whose `walk_min` or `rating` is not a number (or whose station is
/// blank) are dropped. Extra columns are ignored; missing required columns
/// are an error.
pub fn parse_attractions(text: &str) -> Result<AttractionCatalog, LoadError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut attractions = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<AttractionRow>() {
        let row = row.map_err(LoadError::csv(ATTRACTION_TABLE))?;
        match Attraction::from_cells(
            &row.name,
            &row.mrt_station,
            &row.walk_min,
            &row.rating,
            &row.price_level,
            &row.tags,
        ) {
            Ok(attraction) => attractions.push(attraction),
            Err(e) => {
                debug!(name = %row.name, error = %e, "dropping attraction row");
                dropped += 1;
            }
        }
    }

    debug!(
        kept = attractions.len(),
        dropped, "parsed attraction table"
    );

    Ok(AttractionCatalog::new(attractions))
}
