use anyhow::{Context, Result};
use tracing::info;

use magbit_core::{Bitboard, Slider, SliderAttacks, Square};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("magbit starting");

    let attacks = SliderAttacks::global();
    for slider in Slider::ALL {
        let table = attacks.table(slider);
        table
            .verify()
            .with_context(|| format!("{slider} magic table failed verification"))?;
        info!(slider = %slider, slots = table.len(), "magic table verified");
    }

    let sample = attacks.queen_attacks(Square::D4, Bitboard::EMPTY);
    info!(square = %Square::D4, attacked = sample.count(), "queen sample lookup");
    Ok(())
}
