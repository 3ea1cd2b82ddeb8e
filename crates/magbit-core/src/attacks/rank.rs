//! Horizontal slide attacks by direct table lookup.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// Rank attacks for every (inner occupancy, file) pair on a single rank.
///
/// Index = `inner * 8 + file`, where `inner` holds the six non-edge occupancy
/// bits (files b..g) of the rank. Edge occupancy never matters: the slide
/// reaches the edge square whether or not it is occupied.
pub const RANK_ATTACKS: [u8; 512] = compute_rank_attacks();

const fn compute_rank_attacks() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut i = 0usize;
    while i < 512 {
        let occupied = ((i / 8) << 1) as u8;
        let file = i % 8;
        let mut bits = 0u8;

        let mut f = file + 1;
        while f < 8 {
            bits |= 1 << f;
            if occupied & (1 << f) != 0 {
                break;
            }
            f += 1;
        }
        let mut f = file;
        while f > 0 {
            f -= 1;
            bits |= 1 << f;
            if occupied & (1 << f) != 0 {
                break;
            }
        }

        table[i] = bits;
        i += 1;
    }
    table
}

/// Return the squares a slider on `sq` attacks along its rank.
#[inline]
pub fn rank_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    let file = sq.file() as usize;
    let rank_shift = sq.rank() * 8;
    // Inner six bits, pre-doubled: (occ >> shift) & 0b0111_1110 == 2 * inner.
    let inner_x2 = ((occupied.inner() >> rank_shift) & 0x7E) as usize;
    let attacks = RANK_ATTACKS[4 * inner_x2 + file] as u64;
    Bitboard::new(attacks << rank_shift)
}

#[cfg(test)]
mod tests {
    use super::{RANK_ATTACKS, rank_attacks};
    use crate::bitboard::Bitboard;
    use crate::square::Square;

    #[test]
    fn table_matches_known_entries() {
        assert_eq!(RANK_ATTACKS[0], 0xFE);
        assert_eq!(RANK_ATTACKS[8], 0x02);
        assert_eq!(RANK_ATTACKS[9], 0xFD);
        assert_eq!(RANK_ATTACKS[10], 0xFA);
        assert_eq!(RANK_ATTACKS[63], 0x78);
        assert_eq!(RANK_ATTACKS[100], 0xE8);
        assert_eq!(RANK_ATTACKS[300], 0x68);
        assert_eq!(RANK_ATTACKS[511], 0x40);
    }

    #[test]
    fn empty_rank_attacks_whole_rank() {
        for sq in Square::all() {
            let expected = Bitboard::RANK_1 << (sq.rank() * 8);
            assert_eq!(rank_attacks(sq, Bitboard::EMPTY), expected.without(sq));
        }
    }

    #[test]
    fn blockers_on_rank_stop_slide() {
        let occupied = Square::B4.bitboard() | Square::G4.bitboard();
        let attacks = rank_attacks(Square::E4, occupied);
        let expected = [Square::B4, Square::C4, Square::D4, Square::F4, Square::G4]
            .into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb.with(sq));
        assert_eq!(attacks, expected);
    }

    #[test]
    fn other_ranks_are_ignored() {
        let noise = Bitboard::FULL & !(Bitboard::RANK_1 << 24);
        assert_eq!(
            rank_attacks(Square::E4, noise),
            rank_attacks(Square::E4, Bitboard::EMPTY)
        );
    }
}
