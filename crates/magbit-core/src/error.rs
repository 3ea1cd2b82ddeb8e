//! Error types for square conversion and magic table validation.

use crate::attacks::Slider;
use crate::bitboard::Bitboard;
use crate::square::Square;

/// Errors surfaced by the fallible edges of the crate.
///
/// Attack lookups themselves never fail: every precondition there is carried
/// by the types. These variants cover input conversion and the exhaustive
/// table check used by tests and the startup self-check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MagicError {
    /// A square index outside 0..63.
    #[error("square index {index} is out of range 0..63")]
    InvalidSquare {
        /// The rejected index.
        index: u8,
    },

    /// A string that is not a square in algebraic notation.
    #[error("invalid square: \"{input}\"")]
    ParseSquare {
        /// The rejected input.
        input: String,
    },

    /// A stored attack set disagrees with the slow generator, meaning the
    /// magic constant maps two occupancies with different attacks to one slot.
    #[error(
        "{slider} magic for {square} collides at slot {slot} (occupancy {:#018x})",
        .occupancy.inner()
    )]
    Collision {
        /// Piece type whose table is broken.
        slider: Slider,
        /// Square whose magic constant is defective.
        square: Square,
        /// Index into the square's subtable.
        slot: usize,
        /// An occupancy subset whose attacks were overwritten.
        occupancy: Bitboard,
    },
}

#[cfg(test)]
mod tests {
    use super::MagicError;

    #[test]
    fn invalid_square_display() {
        let err = MagicError::InvalidSquare { index: 70 };
        assert_eq!(format!("{err}"), "square index 70 is out of range 0..63");
    }

    #[test]
    fn parse_square_display() {
        let err = MagicError::ParseSquare { input: "z9".into() };
        assert_eq!(format!("{err}"), "invalid square: \"z9\"");
    }
}
