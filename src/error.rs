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

use crate::span::Span;
use thiserror::Error;

/// Failure to read a single move token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("unrecognized move token '{0}'")]
    Unrecognized(String),
}

/// Every way parsing or expanding a piece of notation can fail.
///
/// Each variant carries the offending fragment of the input together with
/// its [`Span`] in the original string, so callers can report the exact
/// location without re-parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommError {
    #[error("notation '{fragment}' has unbalanced brackets")]
    UnbalancedBrackets { fragment: String, span: Span },

    #[error("bracketed group \"{fragment}\" does not contain ',' or ':'")]
    MalformedGroup { fragment: String, span: Span },

    #[error("\"{fragment}\" has several top-level groups with no ',' or ':' joining them")]
    UnsupportedMultiSegment { fragment: String, span: Span },

    #[error("{source}")]
    UnrecognizedToken {
        #[source]
        source: MoveError,
        span: Span,
    },

    #[error("nesting depth {depth} exceeds the limit of {limit} at \"{fragment}\"")]
    ExcessiveNesting {
        depth: usize,
        limit: usize,
        fragment: String,
        span: Span,
    },
}

impl CommError {
    /// Stable error code (C0001, C0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            CommError::UnbalancedBrackets { .. } => "C0001",
            CommError::MalformedGroup { .. } => "C0002",
            CommError::UnsupportedMultiSegment { .. } => "C0003",
            CommError::UnrecognizedToken { .. } => "C0004",
            CommError::ExcessiveNesting { .. } => "C0005",
        }
    }

    /// Location of the offending fragment in the original notation.
    pub fn span(&self) -> Span {
        match self {
            CommError::UnbalancedBrackets { span, .. }
            | CommError::MalformedGroup { span, .. }
            | CommError::UnsupportedMultiSegment { span, .. }
            | CommError::UnrecognizedToken { span, .. }
            | CommError::ExcessiveNesting { span, .. } => *span,
        }
    }

    /// Optional follow-up hint shown under a diagnostic.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            CommError::UnbalancedBrackets { .. } => {
                Some("every '[' needs a matching ']' after it")
            }
            CommError::MalformedGroup { .. } => {
                Some("write [A, B] for a commutator or [A: B] for a conjugate")
            }
            CommError::UnsupportedMultiSegment { .. } => {
                Some("join the groups with ':' or nest them inside a single bracket")
            }
            CommError::UnrecognizedToken { .. } => None,
            CommError::ExcessiveNesting { .. } => {
                Some("raise the limit with ParseOptions::with_max_depth (at most 256)")
            }
        }
    }
}

pub type CommResult<T> = Result<T, CommError>;
