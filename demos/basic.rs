//! Basic example of using the word search engine

use wordsearch_core::{Generator, Options};

fn main() {
    let pool = [
        "anchor", "beacon", "harbor", "island", "lagoon", "mast", "oar", "reef", "sail", "tide",
    ];

    println!("Generating a 10x10 puzzle...\n");
    let options = Options {
        word_count: 6,
        cheat: true,
        ..Options::default()
    };

    match Generator::new(options).generate(&pool) {
        Ok(puzzle) => {
            println!("{}", puzzle.grid());

            println!("{} words:", puzzle.words().len());
            for placement in puzzle.placements() {
                let note = if placement.is_reversed() { " (backwards)" } else { "" };
                println!(
                    "  {:<8} at ({}, {}) {}{}",
                    placement.word, placement.x, placement.y, placement.direction, note
                );
            }

            println!("\nSeed: {}", puzzle.seed());
        }
        Err(e) => println!("Could not generate a puzzle: {}", e),
    }
}
