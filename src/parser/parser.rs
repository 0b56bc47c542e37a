/*
 * ==========================================================================
 * COMMKIT - Commutator Notation for Twisty Puzzles
 * ==========================================================================
 *
 * Core Recursive-Descent Parser
 *
 * This file defines the `Parser` structure and the public `parse()` driver
 * used to turn a notation string into an expression tree.
 *
 * Every recursive call works on a `Span` of the original string. Which node
 * gets built is decided in a fixed order:
 *
 *   sequence → doubled → top-level ':' → single [group] → unsupported
 *
 * The unbracketed ':' is checked before bracket decomposition, so
 * `[A, B]: C` is a conjugate whose setup is a commutator, never a
 * malformed group.
 *
 * --------------------------------------------------------------------------
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

use tracing::{debug, trace};

use crate::ast::{Expr, Token};
use crate::error::{CommError, CommResult};
use crate::parser::helpers::{
    contains_multiple, find_first_unbracketed, find_unbalanced, is_doubled, is_sequential,
    split_words,
};
use crate::parser::options::ParseOptions;
use crate::span::Span;

/// The commutator notation parser.
///
/// Holds nothing but the borrowed input and the limits to apply; all
/// per-call state lives on the stack of the recursive descent, so a
/// `Parser` can be shared freely.
pub struct Parser<'a> {
    /// Complete notation string being parsed.
    pub source: &'a str,

    /// Limits in force for this parse.
    pub options: ParseOptions,
}

/// Parses `source` with default options.
///
/// # Example
/// ```rust
/// let tree = commkit::parser::parse("[R, U]").unwrap();
/// assert_eq!(tree.move_count(), 4);
/// ```
pub fn parse(source: &str) -> CommResult<Expr> {
    parse_with(source, &ParseOptions::default())
}

/// Parses `source` with the given options.
pub fn parse_with(source: &str, options: &ParseOptions) -> CommResult<Expr> {
    Parser::new(source, *options).parse()
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, options: ParseOptions) -> Self {
        Self { source, options }
    }

    /// Parses the whole input into a tree.
    ///
    /// Brackets are validated once here over the untrimmed input; every
    /// split made below lands on a bracket depth of zero, so the pieces
    /// handed to recursive calls stay balanced without re-checking.
    pub fn parse(&self) -> CommResult<Expr> {
        if let Some(at) = find_unbalanced(self.source) {
            debug!(at, "unbalanced brackets");
            return Err(CommError::UnbalancedBrackets {
                fragment: self.source.to_string(),
                span: Span::point(at),
            });
        }

        let root = self.expression(Span::of(self.source), 0)?;
        debug!(
            moves = root.move_count(),
            depth = root.depth(),
            "parsed notation"
        );
        Ok(root)
    }

    /// expression → sequence | doubled | conjugate | bracketed
    ///
    /// Recursive; keep the frame small, `depth_limit` is sized for it.
    fn expression(&self, span: Span, depth: usize) -> CommResult<Expr> {
        let span = span.trim(self.source);
        let text = span.slice(self.source);
        trace!(depth, text, "expression");

        let limit = self.options.depth_limit();
        if depth > limit {
            return Err(CommError::ExcessiveNesting {
                depth,
                limit,
                fragment: text.to_string(),
                span,
            });
        }

        if is_sequential(text) {
            trace!(text, "sequence");
            return Ok(self.sequence(span));
        }

        if is_doubled(text) {
            trace!(text, "doubled");
            // strip "(" and ")2"
            let inner = self.expression(span.sub(1, text.len() - 2), depth + 1)?;
            return Ok(Expr::Doubled {
                inner: Box::new(inner),
            });
        }

        // Unbracketed conjugate shorthand: `A: B`
        if let Some(at) = find_first_unbracketed(text, ':') {
            trace!(text, at, "top-level conjugate");
            let (setup, nested) = self.split(span, at, depth)?;
            return Ok(Expr::Conjugate { setup, nested });
        }

        if !contains_multiple(text) {
            return self.group(span.sub(1, text.len() - 1), depth);
        }

        debug!(text, "multiple independent groups");
        Err(CommError::UnsupportedMultiSegment {
            fragment: text.to_string(),
            span,
        })
    }

    /// bracketed → '[' expr ',' expr ']' | '[' expr ':' expr ']'
    ///
    /// `span` is the inside of the brackets.
    fn group(&self, span: Span, depth: usize) -> CommResult<Expr> {
        let text = span.slice(self.source);

        if let Some(at) = find_first_unbracketed(text, ',') {
            trace!(text, at, "commutator");
            let (first, second) = self.split(span, at, depth)?;
            return Ok(Expr::Commutator { first, second });
        }

        if let Some(at) = find_first_unbracketed(text, ':') {
            trace!(text, at, "bracketed conjugate");
            let (setup, nested) = self.split(span, at, depth)?;
            return Ok(Expr::Conjugate { setup, nested });
        }

        Err(CommError::MalformedGroup {
            fragment: text.to_string(),
            span,
        })
    }

    /// Parses both sides of the one-byte separator at `at` (relative to
    /// `span`).
    fn split(&self, span: Span, at: usize, depth: usize) -> CommResult<(Box<Expr>, Box<Expr>)> {
        let left = self.expression(span.sub(0, at), depth + 1)?;
        let right = self.expression(span.sub(at + 1, span.len()), depth + 1)?;
        Ok((Box::new(left), Box::new(right)))
    }

    /// sequence → token (whitespace token)*
    ///
    /// Tokens stay raw text here; they are lexed into moves on evaluation.
    fn sequence(&self, span: Span) -> Expr {
        let text = span.slice(self.source);
        let tokens = split_words(text)
            .into_iter()
            .map(|(start, end)| Token {
                text: text[start..end].to_string(),
                span: span.sub(start, end),
            })
            .collect();

        Expr::Sequence { tokens }
    }
}
