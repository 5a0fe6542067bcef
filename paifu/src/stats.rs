//! Folds completed rounds into one row per seat.

use crate::{HuleKind, PlayerIdentity, PlayerStat, RoundRecord, Seat};

/// Always returns four rows, one per seat, whatever the player list says.
///
/// Rows follow the declared seat order of `players` when it names all four
/// seats exactly once, and ascending seat order otherwise.
#[must_use]
pub fn aggregate_player_stats(players: &[PlayerIdentity], rounds: &[RoundRecord]) -> [PlayerStat; 4] {
    let mut by_seat = Seat::ALL.map(|seat| {
        let nickname = players
            .iter()
            .find(|p| p.seat == seat)
            .map_or_else(|| format!("seat{seat}"), |p| p.nickname.clone());
        PlayerStat::new(seat, nickname)
    });

    for round in rounds {
        fold_round(&mut by_seat, round);
    }

    let order = declared_order(players).unwrap_or(Seat::ALL);
    order.map(|seat| by_seat[seat.as_usize()].clone())
}

fn fold_round(by_seat: &mut [PlayerStat; 4], round: &RoundRecord) {
    for stat in &mut *by_seat {
        stat.rounds_played += 1;
    }
    for seat in &round.riichi_declared_by {
        by_seat[seat.as_usize()].riichi_count += 1;
    }
    for seat in &round.calls_by {
        by_seat[seat.as_usize()].call_count += 1;
    }
    for seat in &round.kans_by {
        by_seat[seat.as_usize()].kan_count += 1;
    }

    let Some(event) = &round.hule_event else {
        return;
    };

    if let Some(deltas) = &event.delta_scores {
        for (stat, delta) in by_seat.iter_mut().zip(deltas) {
            stat.net_delta += i64::from(*delta);
        }
    }

    for winner in &event.winners {
        let stat = &mut by_seat[winner.as_usize()];
        stat.wins += 1;
        match event.kind {
            HuleKind::SelfDraw => stat.self_draw_wins += 1,
            HuleKind::DiscardWin => stat.discard_wins += 1,
        }
    }

    if let (HuleKind::DiscardWin, Some(loser)) = (event.kind, event.deal_in_loser) {
        by_seat[loser.as_usize()].deal_ins += 1;
    }
}

fn declared_order(players: &[PlayerIdentity]) -> Option<[Seat; 4]> {
    let [a, b, c, d] = players else {
        return None;
    };
    let order = [a.seat, b.seat, c.seat, d.seat];

    let mut seen = [false; 4];
    for seat in order {
        if seen[seat.as_usize()] {
            return None;
        }
        seen[seat.as_usize()] = true;
    }
    Some(order)
}
