//! Magic bitboard tables for sliding piece attack generation.

use std::fmt;
use std::ops::Range;

use tracing::{debug, trace, warn};

use crate::bitboard::Bitboard;
use crate::error::MagicError;
use crate::geometry::{BISHOP_MASKS, ROOK_MASKS};
use crate::square::Square;

use super::magic_data::{BISHOP_MAGICS, ROOK_MAGICS};
use super::slow::{bishop_attacks_slow, rook_attacks_slow};

/// A sliding piece type with its own magic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    /// Both slider kinds.
    pub const ALL: [Slider; 2] = [Slider::Rook, Slider::Bishop];

    /// Relevant-occupancy masks for every square.
    #[inline]
    pub const fn relevant_masks(self) -> &'static [Bitboard; 64] {
        match self {
            Slider::Rook => &ROOK_MASKS,
            Slider::Bishop => &BISHOP_MASKS,
        }
    }

    /// The verified magic constants shipped with the crate.
    #[inline]
    pub const fn default_magics(self) -> &'static [u64; 64] {
        match self {
            Slider::Rook => &ROOK_MAGICS,
            Slider::Bishop => &BISHOP_MAGICS,
        }
    }

    /// Ground-truth attacks from the slow generators.
    #[inline]
    pub fn slow_attacks(self, sq: Square, occupied: Bitboard) -> Bitboard {
        match self {
            Slider::Rook => rook_attacks_slow(sq, occupied),
            Slider::Bishop => bishop_attacks_slow(sq, occupied),
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slider::Rook => f.write_str("rook"),
            Slider::Bishop => f.write_str("bishop"),
        }
    }
}

/// A square's subtable inside the shared attack arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    offset: u32,
    len: u32,
}

impl Span {
    /// First arena index of the subtable.
    #[inline]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }

    /// Number of slots in the subtable.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Return `true` for a zero-length subtable.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Arena index range covered by the subtable.
    #[inline]
    pub const fn range(self) -> Range<usize> {
        self.offset()..self.offset() + self.len()
    }
}

/// Per-square perfect-hash descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicEntry {
    mask: Bitboard,
    magic: u64,
    shift: u8,
    span: Span,
}

impl MagicEntry {
    const EMPTY: MagicEntry = MagicEntry {
        mask: Bitboard::EMPTY,
        magic: 0,
        shift: 64,
        span: Span { offset: 0, len: 0 },
    };

    /// Relevant-occupancy mask.
    #[inline]
    pub const fn mask(&self) -> Bitboard {
        self.mask
    }

    /// Magic multiplier.
    #[inline]
    pub const fn magic(&self) -> u64 {
        self.magic
    }

    /// Right shift after multiplication, `64 - popcount(mask)`.
    #[inline]
    pub const fn shift(&self) -> u8 {
        self.shift
    }

    /// Location of this square's subtable in the arena.
    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Slot within the subtable for `occupied`: `((occ & mask) * magic) >> shift`.
    #[inline(always)]
    pub fn index(&self, occupied: Bitboard) -> usize {
        let relevant = occupied.inner() & self.mask.inner();
        (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Fill `arena` and `entries` with the magic attack table of one slider.
///
/// Squares are laid out back to back in index order: each subtable starts
/// where the previous one ended and holds one slot per occupancy subset of the
/// square's mask. Every subset is enumerated with the Carry-Rippler walk and
/// its ground-truth attacks stored at the magic index.
///
/// Nothing is checked here. A defective magic makes a later subset silently
/// overwrite an earlier one; [`MagicTable::verify`] is what detects that.
/// `arena` is cleared first, so rebuilding from the same inputs reproduces
/// the same table.
pub fn init_magics(
    arena: &mut Vec<Bitboard>,
    entries: &mut [MagicEntry; 64],
    masks: &[Bitboard; 64],
    ground_truth: Slider,
    magics: &[u64; 64],
) {
    arena.clear();
    let mut offset = 0usize;

    for (sq, entry) in Square::all().zip(entries.iter_mut()) {
        let mask = masks[sq.index()];
        debug_assert!(!mask.is_empty(), "empty relevant mask for {sq}");
        let bits = mask.count();
        let len = 1usize << bits;

        *entry = MagicEntry {
            mask,
            magic: magics[sq.index()],
            shift: (64 - bits) as u8,
            span: Span { offset: offset as u32, len: len as u32 },
        };

        arena.resize(offset + len, Bitboard::EMPTY);
        let subtable = &mut arena[offset..offset + len];
        let mut size = 0usize;
        for subset in mask.subsets() {
            subtable[entry.index(subset)] = ground_truth.slow_attacks(sq, subset);
            size += 1;
        }
        debug_assert_eq!(size, len);

        trace!(slider = %ground_truth, square = %sq, offset, bits, "magic subtable filled");
        offset += size;
    }

    debug!(slider = %ground_truth, slots = arena.len(), "magic table built");
}

/// The magic attack table of one slider: 64 descriptors plus the arena
/// their subtables live in.
///
/// Built once, read-only afterwards, and `Sync`, so any number of threads can
/// query a shared instance without locking.
#[derive(Clone, PartialEq, Eq)]
pub struct MagicTable {
    slider: Slider,
    entries: [MagicEntry; 64],
    attacks: Box<[Bitboard]>,
}

impl MagicTable {
    /// Build the table for `slider` with the shipped magic constants.
    pub fn new(slider: Slider) -> MagicTable {
        MagicTable::with_magics(slider, slider.default_magics())
    }

    /// Build the table for `slider` with caller-supplied magic constants.
    ///
    /// The constants are trusted; call [`MagicTable::verify`] on anything
    /// that did not come from an offline search.
    pub fn with_magics(slider: Slider, magics: &[u64; 64]) -> MagicTable {
        let mut arena = Vec::new();
        let mut entries = [MagicEntry::EMPTY; 64];
        init_magics(&mut arena, &mut entries, slider.relevant_masks(), slider, magics);
        MagicTable {
            slider,
            entries,
            attacks: arena.into_boxed_slice(),
        }
    }

    /// Which slider this table answers for.
    #[inline]
    pub const fn slider(&self) -> Slider {
        self.slider
    }

    /// Look up attacks from `sq` given `occupied` squares.
    #[inline]
    pub fn attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        let entry = &self.entries[sq.index()];
        self.attacks[entry.span.offset() + entry.index(occupied)]
    }

    /// Descriptor for `sq`.
    #[inline]
    pub fn entry(&self, sq: Square) -> &MagicEntry {
        &self.entries[sq.index()]
    }

    /// The stored attack sets for `sq`, in slot order.
    pub fn subtable(&self, sq: Square) -> &[Bitboard] {
        &self.attacks[self.entries[sq.index()].span.range()]
    }

    /// Total slots in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.attacks.len()
    }

    /// Return `true` if the arena holds no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attacks.is_empty()
    }

    /// Check every occupancy subset of every square against the slow
    /// generator.
    ///
    /// Returns the first subset whose stored attacks were clobbered by a
    /// destructive collision. Collisions between subsets that share the same
    /// attack set are harmless and pass.
    pub fn verify(&self) -> Result<(), MagicError> {
        for sq in Square::all() {
            let entry = self.entry(sq);
            for subset in entry.mask.subsets() {
                if self.attacks(sq, subset) != self.slider.slow_attacks(sq, subset) {
                    let slot = entry.index(subset);
                    warn!(slider = %self.slider, square = %sq, slot, "destructive magic collision");
                    return Err(MagicError::Collision {
                        slider: self.slider,
                        square: sq,
                        slot,
                        occupancy: subset,
                    });
                }
            }
        }
        debug!(slider = %self.slider, "magic table verified");
        Ok(())
    }
}

impl fmt::Debug for MagicTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MagicTable")
            .field("slider", &self.slider)
            .field("slots", &self.attacks.len())
            .finish_non_exhaustive()
    }
}
