use std::fmt;

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

/// One of the four fixed table positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Seat(u8);

impl Seat {
    pub const ALL: [Seat; 4] = [Seat(0), Seat(1), Seat(2), Seat(3)];

    #[inline]
    #[must_use]
    pub const fn new(n: u64) -> Option<Self> {
        if n < 4 {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerIdentity {
    pub seat: Seat,
    pub nickname: String,
    pub account_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundId {
    pub round_index: u32,
    pub honba: u8,
    pub riichi_sticks: u8,
}

/// A completed round, closed by a win, a draw, or the start of the next round.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub id: RoundId,
    pub start_scores: [i32; 4],
    pub dealer_seat: Seat,
    pub dora_indicators: Vec<String>,
    /// Duplicates are kept as observed.
    pub riichi_declared_by: Vec<Seat>,
    pub calls_by: Vec<Seat>,
    pub kans_by: Vec<Seat>,
    pub hule_event: Option<HuleEvent>,
    pub draw: Option<Draw>,
    pub end_scores: Option<[i32; 4]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HuleKind {
    SelfDraw,
    DiscardWin,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HuleEvent {
    pub kind: HuleKind,
    pub winners: Vec<Seat>,
    /// Best-effort guess from the deltas, only for [`HuleKind::DiscardWin`].
    pub deal_in_loser: Option<Seat>,
    pub han: Option<i32>,
    pub fu: Option<i32>,
    /// Largest delta of the round. May include riichi stick pickups, so it is
    /// for display only.
    pub display_point: Option<i32>,
    pub delta_scores: Option<[i32; 4]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawKind {
    /// 流局, the wall ran out.
    Exhaustive,
    /// 途中流局, e.g. nine terminals or four winds.
    Abortive,
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Exhaustive => "an exhaustive draw",
            Self::Abortive => "an abortive draw",
        };
        fmt::Display::fmt(s, f)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draw {
    pub kind: DrawKind,
    pub delta_scores: Option<[i32; 4]>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    pub seat: Seat,
    pub nickname: String,
    pub rounds_played: u32,
    pub wins: u32,
    pub self_draw_wins: u32,
    pub discard_wins: u32,
    pub deal_ins: u32,
    pub riichi_count: u32,
    pub call_count: u32,
    pub kan_count: u32,
    pub net_delta: i64,
    /// Competition rank by final score, 1 being the top.
    pub placement: Option<u8>,
}

impl PlayerStat {
    #[must_use]
    pub fn new(seat: Seat, nickname: String) -> Self {
        Self {
            seat,
            nickname,
            rounds_played: 0,
            wins: 0,
            self_draw_wins: 0,
            discard_wins: 0,
            deal_ins: 0,
            riichi_count: 0,
            call_count: 0,
            kan_count: 0,
            net_delta: 0,
            placement: None,
        }
    }
}

/// The statistics-ready summary of one match.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMatch {
    pub match_id: String,
    /// Unix seconds.
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    /// Passed through untouched, `null` when the log has none.
    pub rule_raw: Value,
    /// Sorted by seat.
    pub players: Vec<PlayerIdentity>,
    /// Absent means unknown, not scoreless.
    pub final_scores: Option<[i32; 4]>,
    pub rounds: Vec<RoundRecord>,
    pub player_stats: [PlayerStat; 4],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parse_notes: Vec<String>,
}
