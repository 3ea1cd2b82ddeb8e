//! Per-square line geometry, computed at compile time.
//!
//! Line masks (`FILE_MASKS`, `DIAG_MASKS`, `ANTIDIAG_MASKS`) run edge to edge
//! and exclude the square itself; the slow generator trims them by blockers.
//! Relevant-occupancy masks (`ROOK_MASKS`, `BISHOP_MASKS`) additionally drop
//! the far edge square of every ray, since a blocker there changes nothing.

use crate::bitboard::Bitboard;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const fn on_board(rank: i8, file: i8) -> bool {
    rank >= 0 && rank < 8 && file >= 0 && file < 8
}

/// Squares reached from `sq` stepping by (`dr`, `df`), excluding `sq`.
///
/// With `trim_edge`, the last square before leaving the board is omitted.
const fn ray(sq: usize, dr: i8, df: i8, trim_edge: bool) -> u64 {
    let mut bits = 0u64;
    let mut r = (sq / 8) as i8 + dr;
    let mut f = (sq % 8) as i8 + df;
    while on_board(r, f) {
        if trim_edge && !on_board(r + dr, f + df) {
            break;
        }
        bits |= 1u64 << (r as usize * 8 + f as usize);
        r += dr;
        f += df;
    }
    bits
}

const fn compute_masks(directions: &[(i8, i8)], trim_edge: bool) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let mut bits = 0u64;
        let mut d = 0;
        while d < directions.len() {
            bits |= ray(sq, directions[d].0, directions[d].1, trim_edge);
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

const fn compute_square_masks() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        table[sq] = Bitboard::new(1u64 << sq);
        sq += 1;
    }
    table
}

/// Single-bit mask for each square.
pub const SQUARE_MASKS: [Bitboard; 64] = compute_square_masks();

/// The square's file, minus the square.
pub const FILE_MASKS: [Bitboard; 64] = compute_masks(&[(1, 0), (-1, 0)], false);

/// The square's a1-h8 direction diagonal, minus the square.
pub const DIAG_MASKS: [Bitboard; 64] = compute_masks(&[(1, 1), (-1, -1)], false);

/// The square's h1-a8 direction anti-diagonal, minus the square.
pub const ANTIDIAG_MASKS: [Bitboard; 64] = compute_masks(&[(1, -1), (-1, 1)], false);

/// Rook relevant-occupancy masks (edges trimmed).
pub const ROOK_MASKS: [Bitboard; 64] = compute_masks(&ORTHOGONAL, true);

/// Bishop relevant-occupancy masks (edges trimmed).
pub const BISHOP_MASKS: [Bitboard; 64] = compute_masks(&DIAGONAL, true);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;

    #[test]
    fn line_masks_exclude_origin() {
        for sq in Square::all() {
            let i = sq.index();
            for mask in [FILE_MASKS[i], DIAG_MASKS[i], ANTIDIAG_MASKS[i]] {
                assert!(!mask.contains(sq), "line mask for {sq} contains itself");
            }
            assert_eq!(FILE_MASKS[i].count(), 7);
        }
    }

    #[test]
    fn diagonal_line_masks() {
        // a1-h8 main diagonal through d4, minus d4
        assert_eq!(DIAG_MASKS[Square::D4.index()].count(), 7);
        assert!(DIAG_MASKS[Square::D4.index()].contains(Square::H8));
        assert!(DIAG_MASKS[Square::D4.index()].contains(Square::A1));
        // a7-g1 anti-diagonal through d4
        assert_eq!(ANTIDIAG_MASKS[Square::D4.index()].count(), 6);
        assert!(ANTIDIAG_MASKS[Square::D4.index()].contains(Square::A7));
        assert!(ANTIDIAG_MASKS[Square::D4.index()].contains(Square::G1));
        // corners
        assert!(ANTIDIAG_MASKS[Square::A1.index()].is_empty());
        assert!(DIAG_MASKS[Square::H1.index()].is_empty());
    }

    #[test]
    fn relevant_mask_sizes() {
        assert_eq!(ROOK_MASKS[Square::A1.index()].count(), 12);
        assert_eq!(ROOK_MASKS[Square::E4.index()].count(), 10);
        assert_eq!(BISHOP_MASKS[Square::A1.index()].count(), 6);
        assert_eq!(BISHOP_MASKS[Square::D4.index()].count(), 9);
        assert_eq!(ROOK_MASKS[Square::A1.index()].inner(), 0x0001_0101_0101_017E);
    }

    #[test]
    fn square_masks_single_bit() {
        for sq in Square::all() {
            assert_eq!(SQUARE_MASKS[sq.index()], sq.bitboard());
        }
    }
}
