use clap::Parser;
use std::path::PathBuf;
use wordsearch_core::Options;

/// Generate a word search puzzle
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about)]
pub struct Args {
    /// Number of words to place
    #[arg(short = 'n', long = "words", default_value_t = 5)]
    pub word_count: usize,

    /// Grid height
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Grid width
    #[arg(long, default_value_t = 10)]
    pub width: usize,

    /// Longest word to use
    #[arg(long, default_value_t = 7)]
    pub max_length: usize,

    /// Shortest word to use
    #[arg(long, default_value_t = 3)]
    pub min_length: usize,

    /// Never write words back to front
    #[arg(long)]
    pub no_backwards: bool,

    /// Never place words diagonally
    #[arg(long)]
    pub no_diagonals: bool,

    /// JSON word list (an array of strings)
    #[arg(short, long, default_value = "words.json")]
    pub input: PathBuf,

    /// Puzzle seed; 0 picks one from the clock
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seed: i64,

    /// Highlight the placed words
    #[arg(long)]
    pub cheat: bool,

    /// Words per line in the word list
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub columns: u16,

    /// Print the puzzle as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn options(&self) -> Options {
        Options {
            word_count: self.word_count,
            allow_backwards: !self.no_backwards,
            allow_diagonals: !self.no_diagonals,
            height: self.height,
            width: self.width,
            min_word_length: self.min_length,
            max_word_length: self.max_length,
            seed: self.seed,
            cheat: self.cheat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_options() {
        let args = Args::try_parse_from(["wordsearch"]).unwrap();
        assert_eq!(args.options(), Options::default());
        assert_eq!(args.input, PathBuf::from("words.json"));
        assert_eq!(args.columns, 4);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "wordsearch",
            "-n",
            "8",
            "--height",
            "12",
            "--width",
            "15",
            "--max-length",
            "9",
            "--min-length",
            "4",
            "--no-backwards",
            "--no-diagonals",
            "--seed",
            "-17",
            "--cheat",
            "-i",
            "fruit.json",
        ])
        .unwrap();
        let options = args.options();

        assert_eq!(options.word_count, 8);
        assert_eq!((options.width, options.height), (15, 12));
        assert_eq!((options.min_word_length, options.max_word_length), (4, 9));
        assert!(!options.allow_backwards);
        assert!(!options.allow_diagonals);
        assert_eq!(options.seed, -17);
        assert!(options.cheat);
        assert_eq!(args.input, PathBuf::from("fruit.json"));
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(Args::try_parse_from(["wordsearch", "--columns", "0"]).is_err());
    }
}
