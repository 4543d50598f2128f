//! This module defines the crate-wide `Error` type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::graph::VertexId;
use super::reader::Location;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop an adjacency list from being built.
///
/// All variants are fatal; the binary reports them and exits
/// with [`exit_code`](enum.Error.html#method.exit_code).
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong command line, carries the rendered usage message.
    #[error("{0}")]
    Usage(String),

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),

    /// The graph can't be sized from this many vertices.
    #[error("invalid vertex count {0}")]
    InvalidVertexCount(i64),

    /// An integer in the input outside the range of `VertexId`.
    #[error("vertex id {word} at {location} does not fit in 64 bits")]
    IdOverflow { word: String, location: Location },

    #[error("vertex {vertex} is out of range 1..={vertex_count}")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match *self {
            Error::Read(_) => 1,
            Error::Usage(_) => 2,
            Error::Open { .. } => 3,
            Error::InvalidVertexCount(_) | Error::IdOverflow { .. } => 4,
            Error::VertexOutOfRange { .. } => 5,
            Error::Write(_) => 6,
        }
    }
}

#[test]
fn test_exit_codes_are_distinct() {
    let errors = [
        Error::Read(io::Error::new(io::ErrorKind::Other, "boom")),
        Error::Usage("usage".to_owned()),
        Error::Open { path: "x".into(), source: io::Error::new(io::ErrorKind::NotFound, "gone") },
        Error::InvalidVertexCount(0),
        Error::VertexOutOfRange { vertex: 7, vertex_count: 3 },
        Error::Write(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
    ];
    let mut codes: Vec<u8> = errors.iter().map(Error::exit_code).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
    assert!(!codes.contains(&0));

    let overflow = Error::IdOverflow { word: "99999999999999999999".to_owned(), location: Location { row: 1, col: 3 } };
    assert_eq!(overflow.exit_code(), Error::InvalidVertexCount(0).exit_code());
    assert_eq!(overflow.to_string(), "vertex id 99999999999999999999 at line 1, column 3 does not fit in 64 bits");
}

#[test]
fn test_display() {
    let e = Error::VertexOutOfRange { vertex: 0, vertex_count: 4 };
    assert_eq!(e.to_string(), "vertex 0 is out of range 1..=4");
    let e = Error::Open { path: "in.txt".into(), source: io::Error::new(io::ErrorKind::NotFound, "gone") };
    assert_eq!(e.to_string(), "cannot open in.txt: gone");
}
