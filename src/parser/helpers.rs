/*
 * ==========================================================================
 * COMMKIT - Commutator Notation for Twisty Puzzles
 * ==========================================================================
 *
 * File:     parser/helpers.rs
 * Purpose:  Bracket validation, structural classification and the
 *           depth-aware separator scanner used by the parser.
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the COMMKIT project.
 *
 * COMMKIT is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use once_cell::sync::Lazy;
use regex::Regex;

pub const L_BRACKET: char = '[';
pub const R_BRACKET: char = ']';

/// Any `[ … ]` or `( … )` span anywhere in the text.
static NESTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]|\(.*\)").expect("nested pattern is valid"));

/// A parenthesised group immediately followed by `2`, and nothing else.
static DOUBLED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\(.*\)2$").expect("doubled pattern is valid"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("word pattern is valid"));

/// Scans for the first square bracket that breaks nesting.
///
/// Walks left to right keeping a depth counter (`[` increments, `]`
/// decrements).
///
/// # Returns
/// - `None` if the brackets are balanced.
/// - `Some(i)` with the byte index of the first `]` that would take the
///   depth below zero, or, if the scan ends with depth above zero, of the
///   outermost `[` that was never closed.
pub fn find_unbalanced(text: &str) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut outermost_open = 0;

    for (i, ch) in text.char_indices() {
        if ch == L_BRACKET {
            if depth == 0 {
                outermost_open = i;
            }
            depth += 1;
        } else if ch == R_BRACKET {
            depth -= 1;
            if depth < 0 {
                return Some(i);
            }
        }
    }

    (depth > 0).then_some(outermost_open)
}

/// True when `text` holds only plain move tokens and whitespace, i.e. has
/// no bracket span and no parenthesis span anywhere.
pub fn is_sequential(text: &str) -> bool {
    !NESTED.is_match(text)
}

/// True when the whole of `text` is the doubling shorthand `( … )2`.
///
/// Expects already-trimmed text.
pub fn is_doubled(text: &str) -> bool {
    DOUBLED.is_match(text)
}

/// True unless `text` is exactly one bracket group spanning its full
/// length.
///
/// Text that does not start with `[` and end with `]` is reported as
/// multiple, as is text like `[R, L][U, D]` where more than one group
/// closes back to depth zero.
pub fn contains_multiple(text: &str) -> bool {
    if !text.starts_with(L_BRACKET) || !text.ends_with(R_BRACKET) {
        return true;
    }

    let mut depth: i64 = 0;
    let mut segments = 0;

    for ch in text.chars() {
        if ch == L_BRACKET {
            depth += 1;
        } else if ch == R_BRACKET {
            depth -= 1;
            if depth == 0 {
                segments += 1;
            }
        }
    }

    segments > 1
}

/// Finds the first `c` in `text` that is not nested inside square brackets.
///
/// Only square-bracket depth is tracked; a separator inside `( … )` still
/// counts as top level. Not meaningful for `c` equal to `[` or `]`.
///
/// # Returns
/// The byte index of the separator, or `None` if every occurrence is
/// bracketed (or there is none).
pub fn find_first_unbracketed(text: &str, c: char) -> Option<usize> {
    debug_assert!(c != L_BRACKET && c != R_BRACKET);

    let mut depth: i64 = 0;

    for (i, ch) in text.char_indices() {
        if ch == L_BRACKET {
            depth += 1;
        } else if ch == R_BRACKET {
            depth -= 1;
        } else if depth == 0 && ch == c {
            return Some(i);
        }
    }

    None
}

/// Splits flat text into whitespace separated words, each with its byte
/// range relative to `text`.
pub fn split_words(text: &str) -> Vec<(usize, usize)> {
    WORD.find_iter(text).map(|m| (m.start(), m.end())).collect()
}
