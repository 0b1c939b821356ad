use std::io::{stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use shuffle_period::{cycle, deck::DeckSpec, read_cut_size, read_deck_size, CLIArgs};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let mut input = stdin().lock();
    let mut output = stdout();

    let size = match args.deck_size {
        Some(size) => {
            DeckSpec::check_size(size)?;
            size
        }
        None => read_deck_size(&mut input, &mut output)?,
    };
    let cut = match args.cut_size {
        Some(cut) => {
            DeckSpec::check_cut(cut, size)?;
            cut
        }
        None => read_cut_size(&mut input, &mut output, size)?,
    };

    let deck = DeckSpec::new(size, cut)
        .with_context(|| format!("Failed to build a deck of {} cards cut at {}.", size, cut))?;
    let frequencies = cycle::unique_frequencies(&deck, |done, total| {
        println!("Finished with {} of {} cards", done, total)
    });
    let period = cycle::period(&frequencies).with_context(|| {
        format!(
            "Failed to combine the frequencies of a deck of {} cards cut at {}.",
            deck.size(),
            deck.cut()
        )
    })?;

    println!("Shuffles required to return to original state: {}", period);
    println!("Unique Frequency list: ");
    println!("{:?}", frequencies.into_iter().collect::<Vec<_>>());

    Ok(())
}
