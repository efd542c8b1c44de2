//! Wire timestamp handling.
//!
//! The server serializes message times as `YYYY.MM.DD HH:MM` in UTC. The
//! display rule is positional: a message from today renders as `HH:MM`,
//! anything older renders as `DD.MM` (zero-padded, two digits each).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::ProtocolError;

/// Wire format for message timestamps.
const WIRE_FORMAT: &str = "%Y.%m.%d %H:%M";

/// A message timestamp as carried on the wire (UTC, minute precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WireTime(NaiveDateTime);

impl WireTime {
    /// Parse a timestamp from its wire form, e.g. `2021.07.01 05:27`.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        Ok(Self(NaiveDateTime::parse_from_str(text, WIRE_FORMAT)?))
    }

    /// The timestamp in its wire form.
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }

    /// Short display label relative to `today`: `HH:MM` when the calendar
    /// date equals `today`, otherwise `DD.MM`.
    pub fn short_label(&self, today: NaiveDate) -> String {
        if self.0.date() == today {
            self.0.format("%H:%M").to_string()
        } else {
            self.0.format("%d.%m").to_string()
        }
    }
}

impl Serialize for WireTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for WireTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}
