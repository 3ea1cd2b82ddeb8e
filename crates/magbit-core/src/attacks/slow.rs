//! Reference sliding-attack generators used to populate the magic tables.
//!
//! These are exact for any occupancy but cost a handful of extra word
//! operations per call. Nothing at search time should call them; the magic
//! tables are filled from them once and answer every later query.

use crate::bitboard::Bitboard;
use crate::geometry::{ANTIDIAG_MASKS, DIAG_MASKS, FILE_MASKS, SQUARE_MASKS};
use crate::square::Square;

use super::rank::rank_attacks;

/// A line family handled by the `o ^ (o - 2s)` trick.
///
/// Ranks are absent: a vertical flip maps a rank onto another rank rather
/// than reversing it, so they go through [`rank_attacks`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// The square's file.
    File,
    /// The a1-h8 direction diagonal.
    Diagonal,
    /// The h1-a8 direction anti-diagonal.
    AntiDiagonal,
}

impl Line {
    /// All line families in declaration order.
    pub const ALL: [Line; 3] = [Line::File, Line::Diagonal, Line::AntiDiagonal];

    /// Every square on this line through `sq`, excluding `sq`.
    #[inline]
    pub const fn mask(self, sq: Square) -> Bitboard {
        match self {
            Line::File => FILE_MASKS[sq.index()],
            Line::Diagonal => DIAG_MASKS[sq.index()],
            Line::AntiDiagonal => ANTIDIAG_MASKS[sq.index()],
        }
    }
}

/// Attacks from `sq` along a single line family, blocker squares included.
///
/// The forward ray is `occ - s`; the backward ray is the same subtraction on
/// the vertically flipped board, flipped back. XOR-ing both and re-masking
/// leaves exactly the squares up to and including the first blocker on
/// either side.
pub fn sliding_attacks_slow(sq: Square, occupied: Bitboard, line: Line) -> Bitboard {
    let mask = line.mask(sq).inner();
    let mut forward = occupied.inner() & mask;
    let mut reverse = Bitboard::new(forward).flip_vertical().inner();
    forward = forward.wrapping_sub(SQUARE_MASKS[sq.index()].inner());
    reverse = reverse.wrapping_sub(SQUARE_MASKS[sq.flip_rank().index()].inner());
    forward ^= Bitboard::new(reverse).flip_vertical().inner();
    Bitboard::new(forward & mask)
}

/// Rook attacks: rank lookup plus the file trick.
pub fn rook_attacks_slow(sq: Square, occupied: Bitboard) -> Bitboard {
    rank_attacks(sq, occupied) | sliding_attacks_slow(sq, occupied, Line::File)
}

/// Bishop attacks: both diagonal families.
pub fn bishop_attacks_slow(sq: Square, occupied: Bitboard) -> Bitboard {
    sliding_attacks_slow(sq, occupied, Line::Diagonal)
        | sliding_attacks_slow(sq, occupied, Line::AntiDiagonal)
}
