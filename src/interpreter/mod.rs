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
 *   - The MIT License
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

pub mod display;

use crate::ast::{Expr, Token};
use crate::error::{CommError, CommResult};
use crate::moves::{invert, Move};

/// Expands a tree into the flat list of moves it stands for.
///
/// # Rules
/// - `Sequence`   → its tokens, lexed left to right
/// - `Doubled`    → inner, inner
/// - `Conjugate`  → setup, nested, setup⁻¹
/// - `Commutator` → first, second, first⁻¹, second⁻¹
///
/// where `X⁻¹` is X reversed with every move inverted.
///
/// # Errors
/// Fails with `UnrecognizedToken` on the first leaf token that is not a
/// move. Nothing partial is returned.
pub fn flatten(expr: &Expr) -> CommResult<Vec<Move>> {
    match expr {
        Expr::Sequence { tokens } => tokens.iter().map(lex_token).collect(),

        Expr::Doubled { inner } => {
            let once = flatten(inner)?;
            let mut out = Vec::with_capacity(once.len() * 2);
            out.extend_from_slice(&once);
            out.extend(once);
            Ok(out)
        }

        Expr::Conjugate { setup, nested } => {
            let setup = flatten(setup)?;
            let nested = flatten(nested)?;

            let mut out = Vec::with_capacity(setup.len() * 2 + nested.len());
            out.extend_from_slice(&setup);
            out.extend(nested);
            out.extend(invert(&setup));
            Ok(out)
        }

        Expr::Commutator { first, second } => {
            let first = flatten(first)?;
            let second = flatten(second)?;

            let mut out = Vec::with_capacity((first.len() + second.len()) * 2);
            out.extend_from_slice(&first);
            out.extend_from_slice(&second);
            out.extend(invert(&first));
            out.extend(invert(&second));
            Ok(out)
        }
    }
}

fn lex_token(token: &Token) -> CommResult<Move> {
    Move::parse(&token.text).map_err(|source| CommError::UnrecognizedToken {
        source,
        span: token.span,
    })
}

impl Expr {
    /// Method form of [`flatten`].
    pub fn flatten(&self) -> CommResult<Vec<Move>> {
        flatten(self)
    }
}
