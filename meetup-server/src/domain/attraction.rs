//! Attraction records.

use std::fmt;

use super::{DomainError, Station};

/// Separator used by multi-valued columns (`tags`, `price_level`).
pub const LIST_SEPARATOR: char = ';';

/// A coarse cost bucket.
///
/// Tokens outside the known vocabulary are kept verbatim so they can still
/// be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PriceLevel {
    Low,
    Medium,
    High,
    Other(String),
}

impl PriceLevel {
    /// Parse a single price token, case-insensitively.
    pub fn parse(token: &str) -> Self {
        let lower = token.trim().to_lowercase();
        match lower.as_str() {
            "low" => PriceLevel::Low,
            "medium" => PriceLevel::Medium,
            "high" => PriceLevel::High,
            _ => PriceLevel::Other(lower),
        }
    }

    /// Parse a `;`-separated list of price tokens. Never empty.
    pub fn parse_list(raw: &str) -> Vec<Self> {
        split_list(raw).iter().map(|t| PriceLevel::parse(t)).collect()
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLevel::Low => f.write_str("low"),
            PriceLevel::Medium => f.write_str("medium"),
            PriceLevel::High => f.write_str("high"),
            PriceLevel::Other(s) => f.write_str(s),
        }
    }
}

/// Split a multi-valued cell into trimmed, non-empty tokens.
///
/// A cell with no usable token yields the raw cell as its only element, so
/// the result is never empty.
pub fn split_list(raw: &str) -> Vec<String> {
    let tokens: Vec<String> = raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        vec![raw.to_string()]
    } else {
        tokens
    }
}

/// A place to go near an MRT station.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    /// Display name (not necessarily unique).
    pub name: String,

    /// Station the attraction is reached from.
    pub mrt_station: Station,

    /// Walking minutes from the station.
    pub walk_min: f64,

    /// Rating on a 0-5 scale.
    pub rating: f64,

    /// Price buckets on offer. Never empty.
    pub price_levels: Vec<PriceLevel>,

    /// Category labels. Never empty.
    pub tags: Vec<String>,
}

impl Attraction {
    /// Build an attraction from raw table cells.
    ///
    /// Fails when `walk_min` or `rating` is not a finite number, or when the
    /// station is blank.
    pub fn from_cells(
        name: &str,
        mrt_station: &str,
        walk_min: &str,
        rating: &str,
        price_level: &str,
        tags: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.trim().to_string(),
            mrt_station: Station::parse(mrt_station)?,
            walk_min: parse_number("walk_min", walk_min)?,
            rating: parse_number("rating", rating)?,
            price_levels: PriceLevel::parse_list(price_level),
            tags: split_list(tags),
        })
    }

    /// Price levels joined back into their cell form.
    pub fn price_display(&self) -> String {
        join(&self.price_levels)
    }

    /// Tags joined back into their cell form.
    pub fn tags_display(&self) -> String {
        join(&self.tags)
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(&LIST_SEPARATOR.to_string())
}

/// Numeric coercion for a cell. NaN and infinities count as failures.
fn parse_number(field: &'static str, value: &str) -> Result<f64, DomainError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DomainError::NotNumeric {
            field,
            value: value.to_string(),
        })
}
