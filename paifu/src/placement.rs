use crate::{PlayerStat, Seat};

/// Competition ranking ("1224") of the four seats by score, highest first.
/// The result is indexed by seat.
#[must_use]
pub fn competition_ranks(scores: &[i32; 4]) -> [u8; 4] {
    let mut seats = Seat::ALL;
    // stable, so equal scores keep seat order
    seats.sort_by_key(|seat| std::cmp::Reverse(scores[seat.as_usize()]));

    let mut ranks = [0; 4];
    let mut rank = 0;
    for (pos, seat) in seats.iter().enumerate() {
        if pos == 0 || scores[seat.as_usize()] != scores[seats[pos - 1].as_usize()] {
            rank = pos as u8 + 1;
        }
        ranks[seat.as_usize()] = rank;
    }
    ranks
}

pub(crate) fn assign_placements(stats: &mut [PlayerStat; 4], final_scores: &[i32; 4]) {
    let ranks = competition_ranks(final_scores);
    for stat in stats {
        stat.placement = Some(ranks[stat.seat.as_usize()]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ranks() {
        assert_eq!(competition_ranks(&[24300, 18800, 29200, 27700]), [3, 4, 1, 2]);
        assert_eq!(competition_ranks(&[25000, 25000, 25000, 25000]), [1, 1, 1, 1]);
        assert_eq!(competition_ranks(&[30000, 20000, 30000, 20000]), [1, 3, 1, 3]);
        assert_eq!(competition_ranks(&[-500, 40000, 30500, 30000]), [4, 1, 2, 3]);
    }
}
