//! Claimed scores: either real points or a director-assigned average.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Director-assigned placeholder used when a board cannot be played normally.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AvgKind {
    Avg,
    AvgPlus,
    AvgPlusPlus,
    AvgMinus,
    AvgMinusMinus,
}

impl AvgKind {
    pub const ALL: [AvgKind; 5] = [
        AvgKind::Avg,
        AvgKind::AvgPlus,
        AvgKind::AvgPlusPlus,
        AvgKind::AvgMinus,
        AvgKind::AvgMinusMinus,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AvgKind::Avg => "AVG",
            AvgKind::AvgPlus => "AVG+",
            AvgKind::AvgPlusPlus => "AVG++",
            AvgKind::AvgMinus => "AVG-",
            AvgKind::AvgMinusMinus => "AVG--",
        }
    }

    /// Share of the board's peak match points awarded to this line.
    pub const fn mps_fraction(self) -> f64 {
        match self {
            AvgKind::Avg => 0.5,
            AvgKind::AvgPlus => 0.6,
            AvgKind::AvgPlusPlus => 0.8,
            AvgKind::AvgMinus => 0.4,
            AvgKind::AvgMinusMinus => 0.2,
        }
    }

    /// Share of the board's peak relative points awarded to this line.
    pub const fn rps_fraction(self) -> f64 {
        match self {
            AvgKind::Avg => 0.0,
            AvgKind::AvgPlus => 0.2,
            AvgKind::AvgPlusPlus => 0.6,
            AvgKind::AvgMinus => -0.2,
            AvgKind::AvgMinusMinus => -0.6,
        }
    }
}

impl FromStr for AvgKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AVG" => Ok(AvgKind::Avg),
            "AVG+" => Ok(AvgKind::AvgPlus),
            "AVG++" => Ok(AvgKind::AvgPlusPlus),
            "AVG-" => Ok(AvgKind::AvgMinus),
            "AVG--" => Ok(AvgKind::AvgMinusMinus),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AvgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score claimed by one side of a hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScoreValue {
    Numeric(i32),
    Adjusted(AvgKind),
}

impl ScoreValue {
    pub fn as_numeric(&self) -> Option<i32> {
        match self {
            ScoreValue::Numeric(v) => Some(*v),
            ScoreValue::Adjusted(_) => None,
        }
    }
}

impl From<i32> for ScoreValue {
    fn from(v: i32) -> Self {
        ScoreValue::Numeric(v)
    }
}

impl From<AvgKind> for ScoreValue {
    fn from(kind: AvgKind) -> Self {
        ScoreValue::Adjusted(kind)
    }
}

/// Error returned for text that is neither an integer nor a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScoreError(pub String);

impl fmt::Display for ParseScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid score value {:?}", self.0)
    }
}

impl std::error::Error for ParseScoreError {}

impl FromStr for ScoreValue {
    type Err = ParseScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(v) = trimmed.parse::<i32>() {
            return Ok(ScoreValue::Numeric(v));
        }
        trimmed
            .parse::<AvgKind>()
            .map(ScoreValue::Adjusted)
            .map_err(|_| ParseScoreError(s.to_string()))
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Numeric(v) => write!(f, "{v}"),
            ScoreValue::Adjusted(kind) => write!(f, "{kind}"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ScoreRepr {
    Int(i32),
    Text(String),
}

impl Serialize for ScoreValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreValue::Numeric(v) => ScoreRepr::Int(*v),
            ScoreValue::Adjusted(kind) => ScoreRepr::Text(kind.as_str().to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScoreValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ScoreRepr::deserialize(deserializer)? {
            ScoreRepr::Int(v) => Ok(ScoreValue::Numeric(v)),
            ScoreRepr::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}
