//! Seats, Tichu calls and the per-hand call summary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::TournamentError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Seat {
    North,
    South,
    East,
    West,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::South, Seat::East, Seat::West];

    pub const fn side(self) -> Side {
        match self {
            Seat::North | Seat::South => Side::NorthSouth,
            Seat::East | Seat::West => Side::EastWest,
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Seat::North => "N",
            Seat::South => "S",
            Seat::East => "E",
            Seat::West => "W",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// One of the two partnerships at a table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    NorthSouth,
    EastWest,
}

impl Side {
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Side::NorthSouth => [Seat::North, Seat::South],
            Side::EastWest => [Seat::East, Seat::West],
        }
    }
}

/// A bid to go out first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Call {
    #[default]
    None,
    Tichu,
    GrandTichu,
}

impl Call {
    pub const fn as_str(self) -> &'static str {
        match self {
            Call::None => "",
            Call::Tichu => "T",
            Call::GrandTichu => "GT",
        }
    }

    /// Points won by going out first, or lost otherwise.
    pub const fn bonus(self) -> i32 {
        match self {
            Call::None => 0,
            Call::Tichu => 100,
            Call::GrandTichu => 200,
        }
    }
}

impl FromStr for Call {
    type Err = ();

    /// Accepts the trimmed, case-insensitive call vocabulary only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(Call::None),
            "T" => Ok(Call::Tichu),
            "GT" => Ok(Call::GrandTichu),
            _ => Err(()),
        }
    }
}

/// Calls made at each seat for a single hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "CallsRecord", into = "CallsRecord")]
pub struct Calls {
    north: Call,
    south: Call,
    east: Call,
    west: Call,
}

impl Calls {
    /// Parses one raw value per seat, failing on the first value outside
    /// `{"", "T", "GT"}`.
    pub fn new(
        n_call: &str,
        s_call: &str,
        e_call: &str,
        w_call: &str,
    ) -> Result<Self, TournamentError> {
        Ok(Self {
            north: parse_call(n_call, Seat::North)?,
            south: parse_call(s_call, Seat::South)?,
            east: parse_call(e_call, Seat::East)?,
            west: parse_call(w_call, Seat::West)?,
        })
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn call(&self, seat: Seat) -> Call {
        match seat {
            Seat::North => self.north,
            Seat::South => self.south,
            Seat::East => self.east,
            Seat::West => self.west,
        }
    }

    pub fn n_call(&self) -> Call {
        self.north
    }

    pub fn s_call(&self) -> Call {
        self.south
    }

    pub fn e_call(&self) -> Call {
        self.east
    }

    pub fn w_call(&self) -> Call {
        self.west
    }

    /// True if either seat of `side` made `call`.
    pub fn side_called(&self, side: Side, call: Call) -> bool {
        side.seats().iter().any(|&seat| self.call(seat) == call)
    }

    pub fn is_empty(&self) -> bool {
        Seat::ALL.iter().all(|&seat| self.call(seat) == Call::None)
    }
}

fn parse_call(raw: &str, seat: Seat) -> Result<Call, TournamentError> {
    raw.parse::<Call>().map_err(|_| {
        warn!(%seat, call = raw, "rejected call");
        TournamentError::InvalidCall {
            call: raw.trim().to_ascii_uppercase(),
            seat,
        }
    })
}

impl fmt::Display for Calls {
    /// Renders made calls as `N(T),E(GT)`; empty when nobody called.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for seat in Seat::ALL {
            let call = self.call(seat);
            if call == Call::None {
                continue;
            }
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}({})", seat, call.as_str())?;
            first = false;
        }
        Ok(())
    }
}

/// Wire shape of [`Calls`]: one optional string per seat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CallsRecord {
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
}

impl TryFrom<CallsRecord> for Calls {
    type Error = TournamentError;

    fn try_from(record: CallsRecord) -> Result<Self, Self::Error> {
        Calls::new(&record.north, &record.south, &record.east, &record.west)
    }
}

impl From<Calls> for CallsRecord {
    fn from(calls: Calls) -> Self {
        Self {
            north: calls.north.as_str().to_string(),
            south: calls.south.as_str().to_string(),
            east: calls.east.as_str().to_string(),
            west: calls.west.as_str().to_string(),
        }
    }
}
