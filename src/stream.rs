//! This module defines the `WordStream` trait and the `AsciiWords` splitter.
//!
//! Words are raw bytes: input that isn't valid UTF-8 still splits into words,
//! and it's up to the caller to decide what a word means.

use std::io;

/// A streaming iterator yielding borrowed words.
///
/// Unlike `Iterator`, the returned word may borrow from the stream itself,
/// which lets a line-buffered reader hand out slices of its buffer.
pub trait WordStream {
    fn next_word(&mut self) -> io::Result<Option<&[u8]>>;
}

/// Splits a line into words separated by ASCII whitespace.
///
/// Every byte with a value `<= 0x20` is treated as whitespace
/// (this covers `" \t\n\r"` together with the other control characters).
/// Non-ascii whitespace, such as a non-breaking space, is part of a word.
///
/// # Examples
///
/// ```
/// # use adjlist::stream::AsciiWords;
/// let words: Vec<&[u8]> = AsciiWords::new(b" 1\t2\r\n").collect();
/// assert_eq!(words, [b"1", b"2"]);
/// ```
#[derive(Debug, Clone)]
pub struct AsciiWords<'a> {
    line: &'a [u8],
    position: usize,
}

impl<'a> AsciiWords<'a> {
    pub fn new(line: &'a [u8]) -> Self { AsciiWords::starting_at(line, 0) }

    /// Resumes splitting at byte offset `position`.
    pub fn starting_at(line: &'a [u8], position: usize) -> Self { AsciiWords { line, position } }

    /// Byte offset just past the last returned word.
    pub fn position(&self) -> usize { self.position }
}

fn is_blank(byte: u8) -> bool { byte <= b' ' }

impl<'a> Iterator for AsciiWords<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = &self.line[self.position..];
        let start = match rest.iter().position(|&b| !is_blank(b)) {
            Some(offset) => self.position + offset,
            None => {
                self.position = self.line.len();
                return None;
            }
        };
        let len = self.line[start..]
            .iter()
            .position(|&b| is_blank(b))
            .unwrap_or(self.line.len() - start);
        self.position = start + len;
        Some(&self.line[start..self.position])
    }
}

impl<'a> WordStream for AsciiWords<'a> {
    fn next_word(&mut self) -> io::Result<Option<&[u8]>> { Ok(Iterator::next(self)) }
}

#[test]
fn test_positions() {
    let mut words = AsciiWords::new(b"  12 ab\n");
    assert_eq!(words.next(), Some(&b"12"[..]));
    assert_eq!(words.position(), 4);
    assert_eq!(words.next(), Some(&b"ab"[..]));
    assert_eq!(words.position(), 7);
    assert_eq!(words.next(), None);
    assert_eq!(words.position(), 8);
}

#[test]
fn test_resume() {
    let mut words = AsciiWords::starting_at(b"1 2 3", 1);
    assert_eq!(words.next_word().unwrap(), Some(&b"2"[..]));
    assert_eq!(words.next_word().unwrap(), Some(&b"3"[..]));
    assert_eq!(words.next_word().unwrap(), None);
}

#[test]
fn test_non_ascii_is_not_whitespace() {
    let words: Vec<&[u8]> = AsciiWords::new("1\u{a0}2 3".as_bytes()).collect();
    assert_eq!(words, ["1\u{a0}2".as_bytes(), b"3"]);
    let words: Vec<&[u8]> = AsciiWords::new(b"\xff\xfe 4").collect();
    assert_eq!(words, [&b"\xff\xfe"[..], b"4"]);
}
