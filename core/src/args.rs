use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cozy_chess::Color;

#[derive(Parser, Debug)]
#[command(name = "Blunder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Play chess against an engine that tries its hardest to lose")]
pub struct Args {
    /// Log engine decisions to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// The side you play. The engine takes the other one.
    #[arg(long, value_enum, default_value_t = Side::White)]
    pub human: Side,

    /// Start from this position instead of the standard one.
    #[arg(long)]
    pub fen: Option<String>,

    /// Override an engine option, e.g. --option "Check Penalty=40".
    #[arg(short, long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Pause before the engine replies, in milliseconds.
    #[arg(long, default_value_t = 300)]
    pub reply_delay: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["blunder"]);
        assert_eq!(args.human, Side::White);
        assert!(args.fen.is_none());
        assert!(args.options.is_empty());
        assert_eq!(args.reply_delay, 300);
    }

    #[test]
    fn test_repeated_options() {
        let args = Args::parse_from([
            "blunder",
            "--human",
            "black",
            "-o",
            "Check Penalty=40",
            "--option",
            "Capture Penalty=0",
        ]);
        assert_eq!(Color::from(args.human), Color::Black);
        assert_eq!(args.options, vec!["Check Penalty=40", "Capture Penalty=0"]);
    }
}
