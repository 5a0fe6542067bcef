use super::paths;
use super::record::{tagged, Action, RecordKind};
use crate::field::{self, FieldPath};
use crate::PlayerIdentity;

use serde_json::Value;

/// Key of a game end record in the keyed form of the `records` collection,
/// `{".lq.RecordGameEnd": {...}}`.
const GAME_END_KEY: &str = ".lq.RecordGameEnd";

/// A read-only view over one paifu document.
#[derive(Debug, Clone, Copy)]
pub struct RawMatchLog<'a> {
    root: &'a Value,
}

/// One row of the explicit result block in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEntry {
    pub seat: Option<i64>,
    /// Only set when the chosen point field is a JSON number.
    pub point: Option<i32>,
}

/// A game end record found in the `records` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEnd {
    /// Only set when the chosen field is an array of exactly four entries.
    pub scores: Option<[i32; 4]>,
}

impl<'a> RawMatchLog<'a> {
    #[inline]
    #[must_use]
    pub const fn new(root: &'a Value) -> Self {
        Self { root }
    }

    #[must_use]
    pub fn match_id(&self) -> Option<String> {
        paths::MATCH_ID
            .first_present(self.root)
            .and_then(field::as_string)
    }

    #[must_use]
    pub fn start_time(&self) -> Option<i64> {
        paths::START_TIME
            .first_present(self.root)
            .and_then(field::as_i64)
    }

    #[must_use]
    pub fn end_time(&self) -> Option<i64> {
        paths::END_TIME
            .first_present(self.root)
            .and_then(field::as_i64)
    }

    #[must_use]
    pub fn rule_raw(&self) -> Value {
        paths::RULE
            .first_present(self.root)
            .cloned()
            .unwrap_or(Value::Null)
    }

    /// Accounts with a valid seat, sorted by seat, one per seat.
    #[must_use]
    pub fn players(&self) -> Vec<PlayerIdentity> {
        let mut players: Vec<_> = array(self.root, paths::ACCOUNTS)
            .iter()
            .filter_map(|account| {
                let seat = paths::ACCOUNT_SEAT
                    .first_present(account)
                    .and_then(field::as_seat)?;
                let nickname = paths::ACCOUNT_NICKNAME
                    .first_present(account)
                    .and_then(field::as_string)
                    .unwrap_or_default();
                let account_id = paths::ACCOUNT_ID
                    .first_present(account)
                    .and_then(field::as_i64);

                Some(PlayerIdentity {
                    seat,
                    nickname,
                    account_id,
                })
            })
            .collect();

        players.sort_by_key(|p| p.seat);
        players.dedup_by_key(|p| p.seat);
        players
    }

    /// The action list in log order. Entries without a tag are dropped.
    #[must_use]
    pub fn actions(&self) -> Vec<Action> {
        array(self.root, paths::ACTIONS)
            .iter()
            .filter_map(Action::from_value)
            .collect()
    }

    /// The per-seat result block, in document order.
    #[must_use]
    pub fn result_block(&self) -> Option<Vec<ResultEntry>> {
        let players = paths::RESULT_PLAYERS
            .first_present(self.root)?
            .as_array()?;

        let entries = players
            .iter()
            .map(|p| ResultEntry {
                seat: paths::RESULT_SEAT.first_present(p).and_then(field::as_i64),
                point: paths::RESULT_POINT
                    .first_present(p)
                    .filter(|v| v.is_number())
                    .and_then(field::as_i32),
            })
            .collect();

        Some(entries)
    }

    /// Every game end record in the `records` collection, in document order.
    #[must_use]
    pub fn game_ends(&self) -> Vec<GameEnd> {
        array(self.root, paths::RECORDS)
            .iter()
            .filter_map(game_end_body)
            .map(|body| GameEnd {
                scores: paths::GAME_END_SCORES
                    .first_present(body)
                    .and_then(field::score_vector_exact),
            })
            .collect()
    }
}

fn game_end_body(record: &Value) -> Option<&Value> {
    if let Some(body) = record.get(GAME_END_KEY).filter(|v| !v.is_null()) {
        return Some(body);
    }

    match tagged(record)? {
        (RecordKind::GameEnd, body) => Some(body),
        _ => None,
    }
}

fn array(root: &Value, path: FieldPath) -> &[Value] {
    path.first_present(root)
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice)
}
