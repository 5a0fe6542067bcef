//! Folds the action list into completed rounds.
//!
//! At most one round is open at a time. It is closed by a win record, by a
//! draw record, by the next new-round record, or by the end of the log; every
//! close that is not a win leaves a note.

use crate::hule::{build_hule_event, end_scores};
use crate::majsoul::{Action, Call, Discard, DrawRecord, HuleRecord, NewRound};
use crate::{field, Draw, ParseNote, RoundBoundary, RoundId, RoundRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundScan {
    open: Option<RoundRecord>,
    next_index: u32,
    rounds: Vec<RoundRecord>,
    notes: Vec<ParseNote>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedRounds {
    pub rounds: Vec<RoundRecord>,
    pub notes: Vec<ParseNote>,
}

/// Runs a fresh [`RoundScan`] over `actions`.
#[must_use]
pub fn scan_rounds<'a, I>(actions: I) -> ScannedRounds
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .fold(RoundScan::default(), RoundScan::step)
        .finish()
}

impl RoundScan {
    #[must_use]
    pub fn step(mut self, action: &Action) -> Self {
        match action {
            Action::NewRound(new_round) => self.open_round(new_round),
            Action::Discard(discard) => self.discard(*discard),
            Action::Call(call) => self.call(*call),
            Action::Hule(hule) => self.hule(hule),
            Action::Draw(draw) => self.draw(*draw),
            Action::Ignored => (),
        }
        self
    }

    /// Force-closes whatever is still open.
    #[must_use]
    pub fn finish(mut self) -> ScannedRounds {
        self.force_close(RoundBoundary::EndOfLog);

        ScannedRounds {
            rounds: self.rounds,
            notes: self.notes,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    fn open_round(&mut self, new_round: &NewRound) {
        self.force_close(RoundBoundary::NextRound);

        let round_index = self.next_index;
        self.next_index += 1;

        self.open = Some(RoundRecord {
            id: RoundId {
                round_index,
                honba: new_round.honba,
                riichi_sticks: new_round.riichi_sticks,
            },
            start_scores: new_round.start_scores,
            dealer_seat: new_round.dealer,
            dora_indicators: new_round.dora_indicators.clone(),
            riichi_declared_by: vec![],
            calls_by: vec![],
            kans_by: vec![],
            hule_event: None,
            draw: None,
            end_scores: None,
        });
    }

    fn discard(&mut self, discard: Discard) {
        // not deduplicated, a replayed declaration counts twice
        if let (Some(round), Discard { seat: Some(seat), riichi: true }) = (&mut self.open, discard) {
            round.riichi_declared_by.push(seat);
        }
    }

    fn call(&mut self, call: Call) {
        if let (Some(round), Some(seat)) = (&mut self.open, call.seat) {
            round.calls_by.push(seat);
            if call.is_kan {
                round.kans_by.push(seat);
            }
        }
    }

    fn hule(&mut self, hule: &HuleRecord) {
        let Some(mut round) = self.open.take() else {
            return;
        };

        let event = build_hule_event(hule);
        let index = round.id.round_index;
        if event.winners.is_empty() {
            self.notes.push(ParseNote::UnresolvedWinners { round: index });
        }
        if event.delta_scores.is_none() {
            self.notes.push(ParseNote::UnresolvedDeltaScores { round: index });
        }

        round.end_scores = end_scores(&round.start_scores, &event);
        round.hule_event = Some(event);
        self.rounds.push(round);
    }

    fn draw(&mut self, draw: DrawRecord) {
        let Some(mut round) = self.open.take() else {
            return;
        };

        self.notes.push(ParseNote::RoundDrawn {
            round: round.id.round_index,
            kind: draw.kind,
        });

        round.end_scores = draw
            .delta_scores
            .map(|deltas| field::apply_deltas(&round.start_scores, &deltas));
        round.draw = Some(Draw {
            kind: draw.kind,
            delta_scores: draw.delta_scores,
        });
        self.rounds.push(round);
    }

    fn force_close(&mut self, boundary: RoundBoundary) {
        if let Some(round) = self.open.take() {
            self.notes.push(ParseNote::UnresolvedRoundClose {
                round: round.id.round_index,
                boundary,
            });
            self.rounds.push(round);
        }
    }
}
