//! Resolves a match's final score vector from ranked candidate sources.
//!
//! Sources are tried in order and the first one that produces a vector wins.
//! When none does, the final scores are unknown, which is not the same as all
//! zeros.

use crate::field;
use crate::hule::resolve_delta_scores;
use crate::majsoul::{Action, RawMatchLog};
use crate::Seat;

use std::fmt;

pub trait FinalScoreSource: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn resolve(&self, log: &RawMatchLog<'_>) -> Option<[i32; 4]>;
}

/// The explicit per-seat result block in the header. Needs exactly four rows
/// covering every seat once, each with a numeric point.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultBlock;

impl FinalScoreSource for ResultBlock {
    fn name(&self) -> &'static str {
        "result block"
    }

    fn resolve(&self, log: &RawMatchLog<'_>) -> Option<[i32; 4]> {
        let entries = log.result_block()?;
        if entries.len() != 4 {
            return None;
        }

        let mut by_seat = [None; 4];
        for entry in &entries {
            let seat = entry
                .seat
                .and_then(|seat| u64::try_from(seat).ok())
                .and_then(Seat::new)?;
            let slot = &mut by_seat[seat.as_usize()];
            if slot.is_some() {
                return None;
            }
            *slot = Some(entry.point?);
        }

        let [a, b, c, d] = by_seat;
        Some([a?, b?, c?, d?])
    }
}

/// The first game end record in `records` that carries a 4-entry score vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEndRecord;

impl FinalScoreSource for GameEndRecord {
    fn name(&self) -> &'static str {
        "game end record"
    }

    fn resolve(&self, log: &RawMatchLog<'_>) -> Option<[i32; 4]> {
        log.game_ends().into_iter().find_map(|end| end.scores)
    }
}

/// Pre-win scores plus the resolved deltas of the last win record in the
/// action list that has both.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastHule;

impl FinalScoreSource for LastHule {
    fn name(&self) -> &'static str {
        "last hule"
    }

    fn resolve(&self, log: &RawMatchLog<'_>) -> Option<[i32; 4]> {
        log.actions().iter().rev().find_map(|action| {
            let Action::Hule(hule) = action else {
                return None;
            };

            let old = hule
                .old_scores
                .or_else(|| hule.hands.iter().find_map(|hand| hand.old_scores))?;
            let delta = resolve_delta_scores(hule)?;
            Some(field::apply_deltas(&old, &delta))
        })
    }
}

#[derive(Debug)]
pub struct FinalScoreResolver {
    sources: Vec<Box<dyn FinalScoreSource>>,
}

impl Default for FinalScoreResolver {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ResultBlock),
            Box::new(GameEndRecord),
            Box::new(LastHule),
        ])
    }
}

impl FinalScoreResolver {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn FinalScoreSource>>) -> Self {
        Self { sources }
    }

    #[inline]
    #[must_use]
    pub fn resolve(&self, log: &RawMatchLog<'_>) -> Option<[i32; 4]> {
        self.resolve_with_source(log).map(|(_, scores)| scores)
    }

    /// Also reports which source produced the vector.
    #[must_use]
    pub fn resolve_with_source(&self, log: &RawMatchLog<'_>) -> Option<(&'static str, [i32; 4])> {
        self.sources
            .iter()
            .find_map(|source| source.resolve(log).map(|scores| (source.name(), scores)))
    }

    #[must_use]
    pub fn source_names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use serde_json::{json, Value};

    fn hule_action(body: Value) -> Value {
        let mut result = json!({ "name": ".lq.RecordHule" });
        if let (Value::Object(result), Value::Object(body)) = (&mut result, body) {
            result.extend(body);
        }
        json!({ "result": result })
    }

    #[test]
    fn result_block_beats_game_end() {
        let root = json!({
            "head": { "result": { "players": [
                { "seat": 2, "part_point_1": 30000 },
                { "seat": 0, "total_point": 41000 },
                { "seat": 3, "part_point_1": 9000 },
                { "seat": 1, "point": 20000 },
            ]}},
            "records": [{ ".lq.RecordGameEnd": { "scores": [1, 2, 3, 4] } }],
        });
        let log = RawMatchLog::new(&root);

        assert_eq!(
            FinalScoreResolver::default().resolve_with_source(&log),
            Some(("result block", [41000, 20000, 30000, 9000])),
        );
    }

    #[test]
    fn incomplete_result_block_falls_through() {
        let root = json!({
            "head": { "result": { "players": [
                { "seat": 0, "part_point_1": 30000 },
                { "seat": 1, "part_point_1": "20000" },
                { "seat": 2, "part_point_1": 30000 },
                { "seat": 3, "part_point_1": 20000 },
            ]}},
            "records": [
                { ".lq.RecordGameEnd": { "final_scores": [1, 2] } },
                { ".lq.RecordGameEnd": { "finalScores": [10, 20, 30, 40] } },
            ],
        });
        let log = RawMatchLog::new(&root);

        assert_eq!(
            FinalScoreResolver::default().resolve_with_source(&log),
            Some(("game end record", [10, 20, 30, 40])),
        );
    }

    #[test]
    fn result_block_must_cover_every_seat() {
        let game_end = json!([{ ".lq.RecordGameEnd": { "scores": [40000, 20000, 10000, 30000] } }]);
        let with_seats = |seats: [Value; 4]| {
            let players: Vec<_> = seats
                .into_iter()
                .zip([40000, 30000, 20000, 10000])
                .map(|(seat, point)| json!({ "seat": seat, "part_point_1": point }))
                .collect();
            json!({
                "head": { "result": { "players": players } },
                "records": game_end.clone(),
            })
        };

        for seats in [
            [json!(0), json!(0), json!(1), json!(2)],
            [json!(0), json!(1), json!(2), json!(4)],
            [json!(0), json!(1), json!(2), json!(-3)],
            [json!(0), json!(1), json!(2), Value::Null],
        ] {
            let root = with_seats(seats.clone());
            assert_eq!(
                FinalScoreResolver::default().resolve_with_source(&RawMatchLog::new(&root)),
                Some(("game end record", [40000, 20000, 10000, 30000])),
                "seats: {seats:?}",
            );
        }

        let root = with_seats([json!(3), json!(1), json!(0), json!(2)]);
        assert_eq!(
            FinalScoreResolver::default().resolve_with_source(&RawMatchLog::new(&root)),
            Some(("result block", [20000, 30000, 10000, 40000])),
        );
    }

    #[test]
    fn last_hule() {
        let root = json!({ "data": { "data": { "actions": [
            hule_action(json!({
                "old_scores": [25000, 25000, 25000, 25000],
                "delta_scores": [1000, -1000, 0, 0],
            })),
            { "result": { "name": ".lq.RecordNewRound" } },
            hule_action(json!({
                "hules": [{
                    "seat": 1,
                    "old_scores": [26000, 24000, 25000, 25000],
                    "delta_scores": [-2000, 2000, 0, 0],
                }],
            })),
            { "result": { "name": ".lq.RecordDiscardTile", "seat": 0 } },
        ]}}});
        let log = RawMatchLog::new(&root);

        assert_eq!(
            FinalScoreResolver::default().resolve_with_source(&log),
            Some(("last hule", [24000, 26000, 25000, 25000])),
        );
    }

    #[test]
    fn last_hule_uses_resolved_deltas() {
        // the last win only has old and new scores, no delta vector
        let root = json!({ "actions": [
            { "result": { "name": ".lq.RecordNewRound" } },
            hule_action(json!({
                "hules": [{ "seat": 0 }],
                "old_scores": [25000, 25000, 25000, 25000],
                "delta_scores": [8000, -8000, 0, 0],
            })),
            { "result": { "name": ".lq.RecordNewRound" } },
            hule_action(json!({
                "hules": [{ "seat": 2 }],
                "old_scores": [33000, 17000, 25000, 25000],
                "scores": [33000, 17000, 37000, 13000],
            })),
        ]});
        let log = RawMatchLog::new(&root);

        assert_eq!(
            FinalScoreResolver::default().resolve_with_source(&log),
            Some(("last hule", [33000, 17000, 37000, 13000])),
        );

        // record-level old scores with per-hand deltas only
        let root = json!({ "actions": [
            hule_action(json!({
                "hules": [{ "seat": 3, "zimo": true, "delta_scores": [-1000, -1000, -2000, 4000] }],
                "old_scores": [30000, 20000, 25000, 25000],
            })),
        ]});
        assert_eq!(
            FinalScoreResolver::default().resolve(&RawMatchLog::new(&root)),
            Some([29000, 19000, 23000, 29000]),
        );
    }

    #[test]
    fn unknown_is_none() {
        let root = json!({ "actions": [
            { "result": { "name": ".lq.RecordNewRound", "scores": [25000, 25000, 25000, 25000] } },
            hule_action(json!({ "delta_scores": [0, 0, 0, 0] })),
        ]});
        let log = RawMatchLog::new(&root);

        assert_eq!(FinalScoreResolver::default().resolve(&log), None);
    }

    #[test]
    fn custom_order() {
        let root = json!({
            "head": { "result": { "players": [
                { "seat": 0, "point": 1 },
                { "seat": 1, "point": 2 },
                { "seat": 2, "point": 3 },
                { "seat": 3, "point": 4 },
            ]}},
            "records": [{ ".lq.RecordGameEnd": { "scores": [4, 3, 2, 1] } }],
        });
        let log = RawMatchLog::new(&root);
        let resolver = FinalScoreResolver::new(vec![Box::new(GameEndRecord), Box::new(ResultBlock)]);

        assert_eq!(resolver.source_names(), ["game end record", "result block"]);
        assert_eq!(resolver.resolve(&log), Some([4, 3, 2, 1]));
    }
}
