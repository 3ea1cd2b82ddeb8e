//! Sliding piece attack generation with magic bitboards.
//!
//! Rook and bishop attacks for any occupancy are answered in O(1) from
//! perfect-hash tables. The tables are filled once from slow but exact
//! reference generators and are read-only afterwards.

pub mod attacks;
mod bitboard;
mod error;
pub mod geometry;
mod square;

pub use attacks::{
    Line, MagicEntry, MagicTable, Slider, SliderAttacks, Span, bishop_attacks, queen_attacks,
    rook_attacks,
};
pub use bitboard::{Bitboard, Subsets};
pub use error::MagicError;
pub use square::Square;
