//! Sliding piece attack generation backed by magic bitboard tables.

mod magic;
mod magic_data;
mod rank;
mod slow;

use std::sync::OnceLock;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::error::MagicError;
use crate::square::Square;

pub use self::magic::{MagicEntry, MagicTable, Slider, Span, init_magics};
pub use self::magic_data::{BISHOP_MAGICS, ROOK_MAGICS};
pub use self::rank::{RANK_ATTACKS, rank_attacks};
pub use self::slow::{Line, bishop_attacks_slow, rook_attacks_slow, sliding_attacks_slow};

/// Rook and bishop magic tables, built together.
///
/// Construct one per engine (or per test) with [`SliderAttacks::new`], or
/// share the process-wide instance from [`SliderAttacks::global`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderAttacks {
    rook: MagicTable,
    bishop: MagicTable,
}

static GLOBAL: OnceLock<SliderAttacks> = OnceLock::new();

impl SliderAttacks {
    /// Build both tables from the shipped magic constants.
    pub fn new() -> SliderAttacks {
        SliderAttacks::from_tables(MagicTable::new(Slider::Rook), MagicTable::new(Slider::Bishop))
    }

    /// Pair two prebuilt tables.
    ///
    /// # Panics
    ///
    /// Panics if the tables are not a rook table and a bishop table, in that
    /// order.
    pub fn from_tables(rook: MagicTable, bishop: MagicTable) -> SliderAttacks {
        assert_eq!(rook.slider(), Slider::Rook, "first table must be the rook table");
        assert_eq!(bishop.slider(), Slider::Bishop, "second table must be the bishop table");
        SliderAttacks { rook, bishop }
    }

    /// The shared instance, built on first use and immutable afterwards.
    pub fn global() -> &'static SliderAttacks {
        GLOBAL.get_or_init(|| {
            let attacks = SliderAttacks::new();
            debug!(
                rook_slots = attacks.rook.len(),
                bishop_slots = attacks.bishop.len(),
                "sliding attack tables initialized"
            );
            attacks
        })
    }

    /// The table for `slider`.
    #[inline]
    pub fn table(&self, slider: Slider) -> &MagicTable {
        match slider {
            Slider::Rook => &self.rook,
            Slider::Bishop => &self.bishop,
        }
    }

    /// Attacks of `slider` from `sq` given `occupied` squares.
    #[inline]
    pub fn attacks(&self, slider: Slider, sq: Square, occupied: Bitboard) -> Bitboard {
        self.table(slider).attacks(sq, occupied)
    }

    /// Rook attacks from `sq` given `occupied` squares.
    #[inline]
    pub fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.rook.attacks(sq, occupied)
    }

    /// Bishop attacks from `sq` given `occupied` squares.
    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.bishop.attacks(sq, occupied)
    }

    /// Queen attacks: the union of rook and bishop attacks.
    #[inline]
    pub fn queen_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.rook_attacks(sq, occupied) | self.bishop_attacks(sq, occupied)
    }

    /// Exhaustively check both tables. See [`MagicTable::verify`].
    pub fn verify(&self) -> Result<(), MagicError> {
        self.rook.verify()?;
        self.bishop.verify()
    }
}

impl Default for SliderAttacks {
    fn default() -> Self {
        SliderAttacks::new()
    }
}

/// Return rook attacks from `sq` given `occupied` squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    SliderAttacks::global().rook_attacks(sq, occupied)
}

/// Return bishop attacks from `sq` given `occupied` squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    SliderAttacks::global().bishop_attacks(sq, occupied)
}

/// Return queen attacks from `sq` given `occupied` squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    SliderAttacks::global().queen_attacks(sq, occupied)
}
