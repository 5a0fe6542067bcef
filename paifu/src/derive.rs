use crate::final_score::FinalScoreResolver;
use crate::majsoul::RawMatchLog;
use crate::placement::assign_placements;
use crate::round::{scan_rounds, ScannedRounds};
use crate::stats::aggregate_player_stats;
use crate::DerivedMatch;

use std::io::Read;

use serde_json::{self as json, Value};
use thiserror::Error;

/// Used as `match_id` when the log names no match.
pub const UNKNOWN_MATCH_ID: &str = "unknown";

/// Only raised when the input is not JSON at all. Malformed paifu content is
/// reported through `parse_notes` instead.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid json: {source}")]
    InvalidJSON {
        #[from]
        source: json::Error,
    },
}

/// Derives the statistics-ready summary of one paifu document, using the
/// default final score sources.
#[inline]
#[must_use]
pub fn derive_match(root: &Value) -> DerivedMatch {
    derive_match_with(root, &FinalScoreResolver::default())
}

#[must_use]
pub fn derive_match_with(root: &Value, resolver: &FinalScoreResolver) -> DerivedMatch {
    let log = RawMatchLog::new(root);

    let players = log.players();
    let final_scores = resolver.resolve(&log);
    let ScannedRounds { rounds, notes } = scan_rounds(&log.actions());

    let mut player_stats = aggregate_player_stats(&players, &rounds);
    if let Some(scores) = &final_scores {
        assign_placements(&mut player_stats, scores);
    }

    DerivedMatch {
        match_id: log
            .match_id()
            .unwrap_or_else(|| UNKNOWN_MATCH_ID.to_owned()),
        start_time: log.start_time(),
        end_time: log.end_time(),
        rule_raw: log.rule_raw(),
        players,
        final_scores,
        rounds,
        player_stats,
        parse_notes: notes.iter().map(ToString::to_string).collect(),
    }
}

impl DerivedMatch {
    /// Parse a paifu document from a JSON string and derive it.
    #[inline]
    pub fn from_json_str(json_string: &str) -> Result<Self, ParseError> {
        let root: Value = json::from_str(json_string)?;
        Ok(derive_match(&root))
    }

    #[inline]
    pub fn from_json_reader(reader: impl Read) -> Result<Self, ParseError> {
        let root: Value = json::from_reader(reader)?;
        Ok(derive_match(&root))
    }
}
