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

use crate::moves::token::{Layer, Wide};

/// Resolves the leading letter of a move token into a layer.
///
/// This function is used exclusively by the move lexer to turn the first
/// character of a token into its [`Layer`] plus the wide style implied by
/// the letter's case.
///
/// # Parameters
/// - `letter`: The first character of a move token.
///
/// # Returns
/// - `Some((layer, wide))` for a recognised letter.
/// - `None` if the letter names no layer.
///
/// # Examples
/// ```text
/// R  -> (R, No)
/// r  -> (R, Lowercase)
/// M  -> (M, No)
/// x  -> (X, No)
/// X  -> None        rotations are always lowercase
/// m  -> None        slices have no wide form
/// ```
pub fn lookup_layer(letter: char) -> Option<(Layer, Wide)> {
    let found = match letter {
        'U' => (Layer::U, Wide::No),
        'D' => (Layer::D, Wide::No),
        'L' => (Layer::L, Wide::No),
        'R' => (Layer::R, Wide::No),
        'F' => (Layer::F, Wide::No),
        'B' => (Layer::B, Wide::No),

        'u' => (Layer::U, Wide::Lowercase),
        'd' => (Layer::D, Wide::Lowercase),
        'l' => (Layer::L, Wide::Lowercase),
        'r' => (Layer::R, Wide::Lowercase),
        'f' => (Layer::F, Wide::Lowercase),
        'b' => (Layer::B, Wide::Lowercase),

        'M' => (Layer::M, Wide::No),
        'E' => (Layer::E, Wide::No),
        'S' => (Layer::S, Wide::No),

        'x' => (Layer::X, Wide::No),
        'y' => (Layer::Y, Wide::No),
        'z' => (Layer::Z, Wide::No),

        _ => return None,
    };

    Some(found)
}
