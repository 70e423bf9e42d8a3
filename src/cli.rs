//! CLI argument parsing for Tarifar

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tarifar")]
#[command(version)]
#[command(about = "Compute per-subscriber call billing from a CDR file", long_about = None)]
pub struct Cli {
    /// Input CDR file: lines of phone,start,end (no header)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output report file: aggregated cost per phone number
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_both_paths() {
        let cli = Cli::parse_from(["tarifar", "-i", "calls.csv", "-o", "report.csv"]);
        assert_eq!(cli.input, PathBuf::from("calls.csv"));
        assert_eq!(cli.output, PathBuf::from("report.csv"));
    }

    #[test]
    fn test_cli_parses_long_flags() {
        let cli = Cli::parse_from(["tarifar", "--input", "in.txt", "--output", "out.txt"]);
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_cli_requires_input() {
        let result = Cli::try_parse_from(["tarifar", "-o", "report.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_output() {
        let result = Cli::try_parse_from(["tarifar", "-i", "calls.csv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flags() {
        let result = Cli::try_parse_from(["tarifar", "-i", "a", "-o", "b", "--format", "json"]);
        assert!(result.is_err());
    }
}
