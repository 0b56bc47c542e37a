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

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::ast::Expr;
use crate::error::{CommError, CommResult};
use crate::interpreter::flatten;
use crate::moves::{render, Move};
use crate::parser::{parse_with, ParseOptions};

/// A parsed piece of commutator notation.
///
/// Owns the original string exactly as given together with the root of
/// its expression tree. Displaying a `Comm` always prints the original
/// string; the tree is only used for expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comm {
    source: String,
    root: Expr,
}

impl Comm {
    /// Parses notation with default options.
    ///
    /// # Example
    /// ```rust
    /// use commkit::Comm;
    ///
    /// let comm = Comm::parse("[R, U]").unwrap();
    /// assert_eq!(comm.expand().unwrap(), "R U R' U'");
    /// ```
    pub fn parse(source: impl Into<String>) -> CommResult<Self> {
        Self::parse_with(source, &ParseOptions::default())
    }

    pub fn parse_with(source: impl Into<String>, options: &ParseOptions) -> CommResult<Self> {
        let source = source.into();
        let root = parse_with(&source, options)?;
        Ok(Self { source, root })
    }

    /// The notation exactly as it was given.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Expands into the flat list of moves.
    pub fn to_moves(&self) -> CommResult<Vec<Move>> {
        let moves = flatten(&self.root)?;
        debug!(source = %self.source, count = moves.len(), "expanded");
        Ok(moves)
    }

    /// Expands and renders the moves separated by spaces.
    pub fn expand(&self) -> CommResult<String> {
        Ok(render(&self.to_moves()?))
    }
}

impl FromStr for Comm {
    type Err = CommError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Comm::parse(s)
    }
}

impl fmt::Display for Comm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
