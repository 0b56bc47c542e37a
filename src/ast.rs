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

use crate::span::Span;

/// One raw move token of a `Sequence` leaf, still unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

/// A node of a parsed commutator expression.
///
/// Each parent exclusively owns its children; a tree is built once by the
/// parser and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// Plain moves: `R U R'`
    Sequence { tokens: Vec<Token> },

    /// `(X)2`: X performed twice
    Doubled { inner: Box<Expr> },

    /// `A: B` or `[A: B]`: A, then B, then A undone
    Conjugate { setup: Box<Expr>, nested: Box<Expr> },

    /// `[A, B]`: A, B, A undone, B undone
    Commutator { first: Box<Expr>, second: Box<Expr> },
}

impl Expr {
    /// Number of moves this node expands to, computed from the tree shape
    /// alone. Equal to the length of a successful flatten.
    ///
    /// Saturates at `usize::MAX`: a few dozen nested `(X)2` groups already
    /// describe more moves than fit in a `usize`.
    pub fn move_count(&self) -> usize {
        match self {
            Expr::Sequence { tokens } => tokens.len(),
            Expr::Doubled { inner } => inner.move_count().saturating_mul(2),
            Expr::Conjugate { setup, nested } => setup
                .move_count()
                .saturating_mul(2)
                .saturating_add(nested.move_count()),
            Expr::Commutator { first, second } => first
                .move_count()
                .saturating_add(second.move_count())
                .saturating_mul(2),
        }
    }

    /// Height of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Sequence { .. } => 1,
            Expr::Doubled { inner } => 1 + inner.depth(),
            Expr::Conjugate { setup: a, nested: b } | Expr::Commutator { first: a, second: b } => {
                1 + a.depth().max(b.depth())
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Writes the canonical notation for a tree.
    ///
    /// Conjugates are always bracketed, so the output re-parses to the same
    /// shape. This is not how a parsed `Comm` displays itself; that always
    /// echoes the original input.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Sequence { tokens } => {
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    f.write_str(&token.text)?;
                }
                Ok(())
            }
            Expr::Doubled { inner } => write!(f, "({})2", inner),
            Expr::Conjugate { setup, nested } => write!(f, "[{}: {}]", setup, nested),
            Expr::Commutator { first, second } => write!(f, "[{}, {}]", first, second),
        }
    }
}
