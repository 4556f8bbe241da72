mod cli;
mod logging;
mod render;
mod theme;
mod words;

use clap::Parser;
use cli::Args;
use std::io::{self, Write};
use std::process::ExitCode;
use theme::Theme;
use wordsearch_core::Puzzle;

/// Exit code for any puzzle-creation failure
const EXIT_GENERATE_FAILED: u8 = 3;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_logger(args.debug);

    let pool = words::load_words_lenient(&args.input);
    let puzzle = match wordsearch_core::generate(args.options(), &pool) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EXIT_GENERATE_FAILED);
        }
    };

    if let Err(e) = print_puzzle(&args, &puzzle) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_puzzle(args: &Args, puzzle: &Puzzle) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, puzzle)?;
        writeln!(out)?;
    } else {
        let theme = if args.no_color {
            Theme::plain()
        } else {
            Theme::default()
        };
        render::render_puzzle(&mut out, puzzle, usize::from(args.columns), &theme)?;
    }
    out.flush()
}
