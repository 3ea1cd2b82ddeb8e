//! Integration tests for the magic attack tables.
//!
//! Exhaustively checks every occupancy subset of every square against the
//! slow generators, plus a few hand-checked positions.

use magbit_core::attacks::{bishop_attacks_slow, rook_attacks_slow};
use magbit_core::{Bitboard, MagicTable, Slider, SliderAttacks, Square};

fn squares(list: &[Square]) -> Bitboard {
    list.iter().fold(Bitboard::EMPTY, |bb, &sq| bb.with(sq))
}

// ── Exhaustive agreement ──────────────────────────────────────────────────────

#[test]
fn every_subset_matches_slow_generator() {
    let attacks = SliderAttacks::new();
    for slider in Slider::ALL {
        let table = attacks.table(slider);
        for sq in Square::all() {
            for occupied in table.entry(sq).mask().subsets() {
                let expected = match slider {
                    Slider::Rook => rook_attacks_slow(sq, occupied),
                    Slider::Bishop => bishop_attacks_slow(sq, occupied),
                };
                assert_eq!(
                    table.attacks(sq, occupied),
                    expected,
                    "{slider} mismatch on {sq} with occ {:016x}",
                    occupied.inner()
                );
            }
        }
    }
}

#[test]
fn carry_rippler_visits_each_subset_once() {
    for slider in Slider::ALL {
        let table = MagicTable::new(slider);
        for sq in Square::all() {
            let mask = table.entry(sq).mask();
            let mut seen: Vec<u64> = mask.subsets().map(|b| b.inner()).collect();
            assert_eq!(seen.len(), 1usize << mask.count());
            assert_eq!(seen[0], 0, "walk starts at the empty subset");
            assert!(seen.contains(&mask.inner()), "full mask visited on {sq}");

            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), 1usize << mask.count(), "repeat subset on {sq}");
        }
    }
}

#[test]
fn verify_passes_for_shipped_magics() {
    assert_eq!(SliderAttacks::new().verify(), Ok(()));
}

#[test]
fn rebuild_reproduces_identical_tables() {
    assert_eq!(MagicTable::new(Slider::Rook), MagicTable::new(Slider::Rook));
    assert_eq!(MagicTable::new(Slider::Bishop), MagicTable::new(Slider::Bishop));
}

// ── Hand-checked positions ────────────────────────────────────────────────────

#[test]
fn rook_a1_empty_board() {
    let attacks = magbit_core::rook_attacks(Square::A1, Bitboard::EMPTY);
    let expected = (Bitboard::FILE_A | Bitboard::RANK_1).without(Square::A1);
    assert_eq!(attacks, expected);
    assert_eq!(attacks.count(), 14);
}

#[test]
fn bishop_d4_stops_at_f6() {
    let occupied = squares(&[Square::F6, Square::G7]);
    let attacks = magbit_core::bishop_attacks(Square::D4, occupied);
    assert!(attacks.contains(Square::E5));
    assert!(attacks.contains(Square::F6));
    assert!(!attacks.contains(Square::G7));
    assert!(!attacks.contains(Square::H8));
    // Other diagonals are unaffected.
    assert!(attacks.contains(Square::A1));
    assert!(attacks.contains(Square::A7));
    assert!(attacks.contains(Square::G1));
}

#[test]
fn rook_e4_between_e2_and_e6() {
    let occupied = squares(&[Square::E2, Square::E6]);
    let attacks = magbit_core::rook_attacks(Square::E4, occupied);
    let file_part = squares(&[Square::E2, Square::E3, Square::E5, Square::E6]);
    let rank_part = (Bitboard::RANK_1 << 24).without(Square::E4);
    assert_eq!(attacks, file_part | rank_part);
}

#[test]
fn occupancy_outside_mask_is_irrelevant() {
    let attacks = SliderAttacks::new();
    // Edge squares and off-line squares do not change the result.
    let noise = squares(&[Square::E8, Square::A4, Square::H4, Square::B7, Square::G2]);
    assert_eq!(
        attacks.rook_attacks(Square::E4, noise),
        attacks.rook_attacks(Square::E4, noise & squares(&[Square::A4, Square::H4]))
    );
    assert_eq!(
        attacks.bishop_attacks(Square::C5, noise),
        attacks.bishop_attacks(Square::C5, Bitboard::EMPTY.with(Square::B7).with(Square::G2))
    );
}

#[test]
fn global_tables_are_shared_across_threads() {
    let handles: Vec<_> = (0u8..4)
        .map(|i| {
            std::thread::spawn(move || {
                let sq = Square::try_from(i * 9).unwrap();
                magbit_core::queen_attacks(sq, Bitboard::EMPTY).count()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap() >= 21);
    }
}
