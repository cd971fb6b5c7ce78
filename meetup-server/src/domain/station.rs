//! Station identifier type.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// An MRT station name.
///
/// Station names are opaque labels taken from the travel-time table. The
/// only validation is that a name is non-blank; surrounding whitespace is
/// trimmed. Cloning is cheap since the name is shared.
///
/// # Examples
///
/// ```
/// use meetup_server::domain::Station;
///
/// let main = Station::parse(" 台北車站 ").unwrap();
/// assert_eq!(main.as_str(), "台北車站");
///
/// // Blank names are rejected
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Parse a station name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStation {
                reason: "must not be blank",
            });
        }

        Ok(Station(Arc::from(trimmed)))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Station {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_station() {
        assert!(Station::parse("台北車站").is_ok());
        assert!(Station::parse("Ximen").is_ok());
        assert!(Station::parse("A").is_ok());
    }

    #[test]
    fn trims_whitespace() {
        let station = Station::parse("  西門\t").unwrap();
        assert_eq!(station.as_str(), "西門");
        assert_eq!(station, Station::parse("西門").unwrap());
    }

    #[test]
    fn reject_blank() {
        assert!(Station::parse("").is_err());
        assert!(Station::parse(" ").is_err());
        assert!(Station::parse("\t\n").is_err());
    }

    #[test]
    fn display() {
        let station = Station::parse("中山").unwrap();
        assert_eq!(format!("{}", station), "中山");
    }

    #[test]
    fn debug() {
        let station = Station::parse("Ximen").unwrap();
        assert_eq!(format!("{:?}", station), "Station(Ximen)");
    }

    #[test]
    fn serializes_as_plain_string() {
        let station = Station::parse("Ximen").unwrap();
        assert_eq!(serde_json::to_string(&station).unwrap(), "\"Ximen\"");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::parse("Ximen").unwrap());
        assert!(set.contains(&Station::parse(" Ximen ").unwrap()));
        assert!(!set.contains(&Station::parse("Zhongshan").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing is insensitive to surrounding whitespace
        #[test]
        fn padding_ignored(name in "[A-Za-z0-9]{1,12}", left in " {0,3}", right in " {0,3}") {
            let padded = format!("{left}{name}{right}");
            let station = Station::parse(&padded).unwrap();
            prop_assert_eq!(station.as_str(), name.as_str());
        }

        /// Whitespace-only strings are always rejected
        #[test]
        fn whitespace_rejected(s in "[ \t]{0,6}") {
            prop_assert!(Station::parse(&s).is_err());
        }
    }
}
