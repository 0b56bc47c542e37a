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

use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::error::MoveError;
use crate::moves::layers::lookup_layer;
use crate::moves::token::{Move, Turns, Wide};

/// Shape of a single move token: a layer letter, an optional `w`, and an
/// optional amount suffix.
static MOVE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<layer>[A-Za-z])(?P<wide>w)?(?P<amount>2'|'2|2|')?$")
        .expect("move token pattern is valid")
});

impl Move {
    /// Parses one move token such as `R`, `U2`, `r'` or `Fw2`.
    ///
    /// # Errors
    /// Returns [`MoveError::Unrecognized`] when the token is empty, starts
    /// with a letter that names no layer, carries a `w` on a layer that
    /// cannot be turned wide, or ends in an unknown suffix.
    pub fn parse(token: &str) -> Result<Move, MoveError> {
        let unrecognized = || MoveError::Unrecognized(token.to_string());

        let caps = MOVE_TOKEN.captures(token).ok_or_else(unrecognized)?;

        let letter = caps["layer"].chars().next().ok_or_else(unrecognized)?;
        let (layer, mut wide) = lookup_layer(letter).ok_or_else(unrecognized)?;

        if caps.name("wide").is_some() {
            // `rw` and `Mw` are not a thing
            if wide != Wide::No || !layer.is_face() {
                return Err(unrecognized());
            }
            wide = Wide::Suffix;
        }

        let turns = match caps.name("amount").map(|m| m.as_str()) {
            None => Turns::Clockwise,
            Some("'") => Turns::CounterClockwise,
            Some(_) => Turns::Double,
        };

        Ok(Move { layer, wide, turns })
    }
}

impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::token::Layer;

    #[test]
    fn parses_plain_faces() {
        let m = Move::parse("R").unwrap();
        assert_eq!(m, Move::new(Layer::R, Turns::Clockwise));

        let m = Move::parse("U'").unwrap();
        assert_eq!(m, Move::new(Layer::U, Turns::CounterClockwise));
    }

    #[test]
    fn double_accepts_either_direction() {
        for token in ["M2", "M2'", "M'2"] {
            let m = Move::parse(token).unwrap();
            assert_eq!(m.turns, Turns::Double, "{}", token);
            assert_eq!(m.to_string(), "M2");
        }
    }

    #[test]
    fn wide_spellings_render_back_as_written() {
        assert_eq!(Move::parse("Rw'").unwrap().to_string(), "Rw'");
        assert_eq!(Move::parse("r2").unwrap().to_string(), "r2");
        assert_eq!(Move::parse("x").unwrap().to_string(), "x");
    }

    #[test]
    fn rejects_garbage() {
        for token in ["", "Q", "R3", "Mw", "rw", "X", "R''", "[R", "R,"] {
            assert_eq!(
                Move::parse(token),
                Err(MoveError::Unrecognized(token.to_string())),
                "{}",
                token
            );
        }
    }

    #[test]
    fn inverse_swaps_direction() {
        let m: Move = "F".parse().unwrap();
        assert_eq!(m.inverse().to_string(), "F'");
        assert_eq!(m.inverse().inverse(), m);

        let d: Move = "d2".parse().unwrap();
        assert_eq!(d.inverse(), d);
    }
}
