use std::collections::HashMap;

use itertools::Itertools;
use util::{word, ws, ParseResult, Span};

pub fn char_frequencies(s: &str) -> HashMap<char, usize> {
    s.chars().counts()
}

/// Number of ordered index pairs `(i, j)`, `i == j` included, with
/// `s[i] == s[j]`. Each character seen `c` times contributes `c²`.
/// Counts Unicode `char`s, not bytes.
pub fn equal_pairs(s: &str) -> u64 {
    let freqs = char_frequencies(s);
    let total: u64 = freqs.values().map(|&c| (c as u64).pow(2)).sum();

    log::debug!("{} distinct chars, {total} pairs", freqs.len());

    total
}

pub fn parse_string(i: Span) -> ParseResult<&str> {
    let (i, w) = ws(word)(i)?;
    Ok((i, *w.fragment()))
}
