//! A single scored board between two pairs, validated against the game's
//! scoring rules at construction.
//!
//! Which seat went out first (and second) is never recorded, yet the legal
//! score band depends on it. Validation therefore tries every out-order of
//! the four seats and accepts the result if any of them explains the claimed
//! scores and calls.

use serde::Serialize;
use tracing::warn;

use super::calls::{Calls, Seat, Side};
use super::score::{AvgKind, ScoreValue};
use crate::errors::TournamentError;

/// Card points a side can take when nobody sweeps.
pub const CARD_POINTS_MIN: i32 = -25;
pub const CARD_POINTS_MAX: i32 = 125;
/// Card points in a hand.
pub const HAND_POINTS: i32 = 100;
/// Points for a side whose two players go out first and second.
pub const SWEEP_POINTS: i32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandResult {
    board_no: u32,
    ns_pair: u32,
    ew_pair: u32,
    ns_score: ScoreValue,
    ew_score: ScoreValue,
    calls: Calls,
}

impl HandResult {
    pub fn new(
        board_no: u32,
        ns_pair: u32,
        ew_pair: u32,
        ns_score: impl Into<ScoreValue>,
        ew_score: impl Into<ScoreValue>,
        calls: Calls,
    ) -> Result<Self, TournamentError> {
        let result = Self {
            board_no,
            ns_pair,
            ew_pair,
            ns_score: ns_score.into(),
            ew_score: ew_score.into(),
            calls,
        };
        if !result.is_legal() {
            warn!(
                board_no,
                ns_pair,
                ew_pair,
                ns_score = %result.ns_score,
                ew_score = %result.ew_score,
                calls = %result.calls,
                "rejected hand result"
            );
            return Err(TournamentError::InvalidScore {
                board_no,
                ns_pair,
                ew_pair,
            });
        }
        Ok(result)
    }

    pub fn board_no(&self) -> u32 {
        self.board_no
    }

    pub fn ns_pair(&self) -> u32 {
        self.ns_pair
    }

    pub fn ew_pair(&self) -> u32 {
        self.ew_pair
    }

    pub fn ns_score(&self) -> ScoreValue {
        self.ns_score
    }

    pub fn ew_score(&self) -> ScoreValue {
        self.ew_score
    }

    pub fn calls(&self) -> &Calls {
        &self.calls
    }

    /// NS score minus EW score; `None` for an averaged result.
    pub fn diff(&self) -> Option<i32> {
        Some(self.ns_score.as_numeric()? - self.ew_score.as_numeric()?)
    }

    /// The sentinels of an averaged result, NS first.
    pub fn adjusted(&self) -> Option<(AvgKind, AvgKind)> {
        match (self.ns_score, self.ew_score) {
            (ScoreValue::Adjusted(ns), ScoreValue::Adjusted(ew)) => Some((ns, ew)),
            _ => None,
        }
    }

    pub fn is_adjusted(&self) -> bool {
        self.adjusted().is_some()
    }

    fn is_legal(&self) -> bool {
        match (self.ns_score, self.ew_score) {
            (ScoreValue::Numeric(ns), ScoreValue::Numeric(ew)) => {
                out_orders().any(|order| explains_score(&order, ns, ew, &self.calls))
            }
            (ScoreValue::Adjusted(_), ScoreValue::Adjusted(_)) => self.calls.is_empty(),
            (ScoreValue::Numeric(_), ScoreValue::Adjusted(_))
            | (ScoreValue::Adjusted(_), ScoreValue::Numeric(_)) => false,
        }
    }
}

/// Every order in which the four seats can go out: all 24 permutations.
pub fn out_orders() -> impl Iterator<Item = [Seat; 4]> {
    Seat::ALL.into_iter().flat_map(|a| {
        Seat::ALL
            .into_iter()
            .filter(move |&b| b != a)
            .flat_map(move |b| {
                Seat::ALL
                    .into_iter()
                    .filter(move |&c| c != a && c != b)
                    .flat_map(move |c| {
                        Seat::ALL
                            .into_iter()
                            .filter(move |&d| d != a && d != b && d != c)
                            .map(move |d| [a, b, c, d])
                    })
            })
    })
}

/// Net Tichu bonus of `side` when `first_out` went out first.
fn tichu_bonus(calls: &Calls, side: Side, first_out: Seat) -> i32 {
    side.seats()
        .iter()
        .map(|&seat| {
            let bonus = calls.call(seat).bonus();
            if seat == first_out {
                bonus
            } else {
                -bonus
            }
        })
        .sum()
}

/// The side that took first and second place, if any.
fn sweeping_side(order: &[Seat; 4]) -> Option<Side> {
    let side = order[0].side();
    (order[1].side() == side).then_some(side)
}

/// Whether the scores are reachable when the seats go out in `order`.
fn explains_score(order: &[Seat; 4], ns: i32, ew: i32, calls: &Calls) -> bool {
    // Submitted scores are unbounded; sum in i64.
    let total = i64::from(ns) + i64::from(ew);
    if total.rem_euclid(i64::from(HAND_POINTS)) != 0
        || ns.rem_euclid(5) != 0
        || ew.rem_euclid(5) != 0
    {
        return false;
    }

    let ns_bonus = tichu_bonus(calls, Side::NorthSouth, order[0]);
    let ew_bonus = tichu_bonus(calls, Side::EastWest, order[0]);

    let sweep = sweeping_side(order);
    let (ns_bounds, ew_bounds) = match sweep {
        Some(Side::NorthSouth) => ((SWEEP_POINTS, SWEEP_POINTS), (0, 0)),
        Some(Side::EastWest) => ((0, 0), (SWEEP_POINTS, SWEEP_POINTS)),
        None => (
            (CARD_POINTS_MIN, CARD_POINTS_MAX),
            (CARD_POINTS_MIN, CARD_POINTS_MAX),
        ),
    };

    let within = |score: i32, (lo, hi): (i32, i32), bonus: i32| {
        (lo + bonus..=hi + bonus).contains(&score)
    };
    if !within(ns, ns_bounds, ns_bonus) || !within(ew, ew_bounds, ew_bonus) {
        return false;
    }
    sweep.is_some() || total - i64::from(ns_bonus + ew_bonus) == i64::from(HAND_POINTS)
}

