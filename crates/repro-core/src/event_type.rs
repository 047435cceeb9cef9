//! Reproductive event types as the single source of truth for type strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of reproductive events tracked on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Estrus detected; the animal is receptive to mating.
    Heat,
    Mating,
    /// Farrowing.
    Birth,
}

impl EventType {
    pub const ALL: [Self; 3] = [Self::Heat, Self::Mating, Self::Birth];

    /// String representation used in serialized events and CLI arguments.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Heat => "heat",
            Self::Mating => "mating",
            Self::Birth => "birth",
        }
    }

    /// Display text shown on the timeline for an event of this type.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Heat => "Heat detected",
            Self::Mating => "Mating recorded",
            Self::Birth => "Birth recorded",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heat" | "Heat" | "estrus" | "celo" => Ok(Self::Heat),
            "mating" | "Mating" | "monta" => Ok(Self::Mating),
            "birth" | "Birth" | "farrowing" | "parto" => Ok(Self::Birth),
            _ => Err(UnknownEventType(s.to_string())),
        }
    }
}

impl Serialize for EventType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for unknown event type strings.
#[derive(Debug, Clone)]
pub struct UnknownEventType(String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown event type: {} (expected heat, mating or birth)",
            self.0
        )
    }
}

impl std::error::Error for UnknownEventType {}
