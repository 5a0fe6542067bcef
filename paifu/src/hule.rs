//! Builds a normalized [`HuleEvent`] out of one win record.

use crate::field;
use crate::majsoul::HuleRecord;
use crate::{HuleEvent, HuleKind, Seat};

/// Where the per-seat deltas of a win may be found, in the order they are
/// tried by [`build_hule_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaSource {
    /// The first winning hand that carries its own delta vector.
    PerHand,
    /// A delta vector on the record itself.
    RecordLevel,
    /// New scores minus old scores on the record itself.
    ScoreDifference,
}

pub const DELTA_SOURCES: [DeltaSource; 3] = [
    DeltaSource::PerHand,
    DeltaSource::RecordLevel,
    DeltaSource::ScoreDifference,
];

impl DeltaSource {
    #[must_use]
    pub fn resolve(self, record: &HuleRecord) -> Option<[i32; 4]> {
        match self {
            Self::PerHand => record.hands.iter().find_map(|hand| hand.delta_scores),
            Self::RecordLevel => record.delta_scores,
            Self::ScoreDifference => {
                let (old, new) = record.old_scores.zip(record.new_scores)?;
                let mut ret = [0; 4];
                for ((delta, old), new) in ret.iter_mut().zip(old).zip(new) {
                    *delta = new.saturating_sub(old);
                }
                Some(ret)
            }
        }
    }
}

#[must_use]
pub fn resolve_delta_scores(record: &HuleRecord) -> Option<[i32; 4]> {
    DELTA_SOURCES
        .iter()
        .find_map(|source| source.resolve(record))
}

/// Guesses who dealt in: the non-winner with the most negative delta. Ties go
/// to the lower seat. No guess is made when nobody lost points.
#[must_use]
pub fn guess_deal_in(delta_scores: &[i32; 4], winners: &[Seat]) -> Option<Seat> {
    Seat::ALL
        .into_iter()
        .filter(|seat| !winners.contains(seat))
        .map(|seat| (seat, delta_scores[seat.as_usize()]))
        .min_by_key(|&(_, delta)| delta)
        .filter(|&(_, delta)| delta < 0)
        .map(|(seat, _)| seat)
}

/// Never fails. Whatever cannot be resolved is left absent and it is up to the
/// caller to report it.
#[must_use]
pub fn build_hule_event(record: &HuleRecord) -> HuleEvent {
    let winners: Vec<_> = record.hands.iter().filter_map(|hand| hand.seat).collect();

    // simultaneous wins only ever happen off a discard, and a self draw needs
    // a known winner
    let kind = match (record.hands.as_slice(), winners.as_slice()) {
        ([hand], [_]) if hand.self_drawn => HuleKind::SelfDraw,
        _ => HuleKind::DiscardWin,
    };

    let delta_scores = resolve_delta_scores(record);
    let deal_in_loser = match (kind, &delta_scores) {
        (HuleKind::DiscardWin, Some(deltas)) => guess_deal_in(deltas, &winners),
        _ => None,
    };

    let first_hand = record.hands.first();

    HuleEvent {
        kind,
        winners,
        deal_in_loser,
        han: first_hand.and_then(|hand| hand.han),
        fu: first_hand.and_then(|hand| hand.fu),
        display_point: delta_scores.and_then(|deltas| deltas.into_iter().max()),
        delta_scores,
    }
}

/// Adds a win's deltas onto the round's starting scores.
#[inline]
#[must_use]
pub fn end_scores(start_scores: &[i32; 4], event: &HuleEvent) -> Option<[i32; 4]> {
    event
        .delta_scores
        .map(|deltas| field::apply_deltas(start_scores, &deltas))
}
