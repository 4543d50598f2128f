//! Command line configuration.
//!
//! Logging is configured separately, through the `RUST_LOG` environment variable.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use super::error::{Error, Result};

/// Prints the sorted adjacency list of an undirected graph.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "adjlist", version)]
pub struct Config {
    /// Text file with whitespace-separated pairs of vertex ids
    pub input: PathBuf,
}

impl Config {
    /// Parses the arguments, including the program name in the first position.
    ///
    /// `--help` and `--version` print their message and exit the process.
    ///
    /// ### Errors
    ///
    /// `Usage` with the rendered message, if there isn't exactly one input path.
    pub fn from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::try_parse_from(args).map_err(|e| {
            if !e.use_stderr() {
                e.exit();
            }
            Error::Usage(e.to_string())
        })
    }
}

#[test]
fn test_one_input() {
    let config = Config::from_args(&["adjlist", "edges.txt"]).unwrap();
    assert_eq!(config.input, PathBuf::from("edges.txt"));
}

#[test]
fn test_wrong_argument_count() {
    for args in &[&["adjlist"][..], &["adjlist", "a.txt", "b.txt"][..]] {
        match Config::from_args(args.iter()) {
            Err(Error::Usage(message)) => assert!(message.contains("Usage"), "{}", message),
            other => panic!("unexpected result for {:?}: {:?}", args, other),
        }
    }
}
