use crate::DrawKind;

use std::fmt;

use thiserror::Error;

/// Advisory data-quality notes. None of these stop the derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNote {
    #[error("round {round} closed at {boundary} without an explicit win (draw or missing record)")]
    UnresolvedRoundClose { round: u32, boundary: RoundBoundary },

    #[error("round {round} ended in {kind} without a win")]
    RoundDrawn { round: u32, kind: DrawKind },

    #[error("round {round}: win record has no recognizable delta scores")]
    UnresolvedDeltaScores { round: u32 },

    #[error("round {round}: win record has no recognizable winner seat")]
    UnresolvedWinners { round: u32 },
}

/// Where a round without a win record was force-closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundBoundary {
    NextRound,
    EndOfLog,
}

impl fmt::Display for RoundBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NextRound => "the next round",
            Self::EndOfLog => "the end of the log",
        };
        fmt::Display::fmt(s, f)
    }
}
