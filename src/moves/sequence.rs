/*
 * ==========================================================================
 * COMMKIT - Commutator Notation for Twisty Puzzles
 * ==========================================================================
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

use crate::error::MoveError;
use crate::moves::token::Move;

/// Parses a whitespace separated run of move tokens.
///
/// Empty or blank text is an empty sequence. The first bad token aborts
/// the whole parse.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, MoveError> {
    text.split_whitespace().map(Move::parse).collect()
}

/// Returns the sequence that undoes `moves`: reversed, each move inverted.
pub fn invert(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(Move::inverse).collect()
}

/// Renders moves separated by single spaces.
pub fn render(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
