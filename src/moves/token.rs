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

use serde::{Serialize, Serializer};
use std::fmt;

/// The layer (or whole cube) a move turns.
///
/// # Categories
/// - Outer faces: `U D L R F B`
/// - Slices: `M E S`
/// - Rotations: `x y z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    U,
    D,
    L,
    R,
    F,
    B,
    M,
    E,
    S,
    X,
    Y,
    Z,
}

impl Layer {
    /// Outer faces are the only layers that may be turned wide.
    pub fn is_face(&self) -> bool {
        matches!(
            self,
            Layer::U | Layer::D | Layer::L | Layer::R | Layer::F | Layer::B
        )
    }

    /// The letter this layer is written with when not turned wide.
    pub fn letter(&self) -> char {
        match self {
            Layer::U => 'U',
            Layer::D => 'D',
            Layer::L => 'L',
            Layer::R => 'R',
            Layer::F => 'F',
            Layer::B => 'B',
            Layer::M => 'M',
            Layer::E => 'E',
            Layer::S => 'S',
            Layer::X => 'x',
            Layer::Y => 'y',
            Layer::Z => 'z',
        }
    }
}

/// How a wide turn was written.
///
/// Both spellings mean the same turn; the distinction only exists so a
/// move renders back the way the user wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wide {
    /// A single layer: `R`
    No,
    /// Wide with a `w` suffix: `Rw`
    Suffix,
    /// Wide written in lowercase: `r`
    Lowercase,
}

/// Amount of rotation applied by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turns {
    /// A quarter turn clockwise (no suffix).
    Clockwise,
    /// A half turn (`2`). Direction is irrelevant, so `2'` is accepted too.
    Double,
    /// A quarter turn counter-clockwise (`'`).
    CounterClockwise,
}

impl Turns {
    pub fn inverse(&self) -> Self {
        match self {
            Turns::Clockwise => Turns::CounterClockwise,
            Turns::Double => Turns::Double,
            Turns::CounterClockwise => Turns::Clockwise,
        }
    }

    fn suffix(&self) -> &'static str {
        match self {
            Turns::Clockwise => "",
            Turns::Double => "2",
            Turns::CounterClockwise => "'",
        }
    }
}

/// A single structured face-turn instruction.
///
/// Produced by `Move::parse` from one whitespace separated token and
/// consumed by whatever executes or renders a sequence. `Move` does not
/// know which puzzle it will run on; `Rw` is accepted whether or not the
/// puzzle has a wide layer.
///
/// # Example
/// ```text
/// R     →  { layer: R, wide: No,        turns: Clockwise }
/// r2    →  { layer: R, wide: Lowercase, turns: Double }
/// Uw'   →  { layer: U, wide: Suffix,    turns: CounterClockwise }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub layer: Layer,
    pub wide: Wide,
    pub turns: Turns,
}

impl Move {
    pub fn new(layer: Layer, turns: Turns) -> Self {
        Self {
            layer,
            wide: Wide::No,
            turns,
        }
    }

    /// The move that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            turns: self.turns.inverse(),
            ..*self
        }
    }
}

impl fmt::Display for Move {
    /// Formats a move as its canonical token.
    ///
    /// `2'` and `'2` both render as `2`, so rendering a parsed token is
    /// not always byte-identical to the input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.wide {
            Wide::No => write!(f, "{}", self.layer.letter())?,
            Wide::Suffix => write!(f, "{}w", self.layer.letter())?,
            Wide::Lowercase => write!(f, "{}", self.layer.letter().to_ascii_lowercase())?,
        }
        f.write_str(self.turns.suffix())
    }
}

impl Serialize for Move {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
