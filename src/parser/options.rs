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

/// Limits applied while parsing notation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Deepest recursive parse call allowed; the root call is depth 0.
    ///
    /// Anything deeper fails with `ExcessiveNesting` instead of growing
    /// the stack without bound. Never more than
    /// [`ParseOptions::MAX_SUPPORTED_DEPTH`] is honoured.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Hard ceiling on recursion, safe on a default 2 MiB thread stack
    /// in unoptimised builds. Larger requested limits are clamped to it.
    pub const MAX_SUPPORTED_DEPTH: usize = 256;

    /// Tight limit for notation coming from untrusted sources.
    pub const STRICT: Self = Self { max_depth: 32 };

    /// Generous limit for machine-generated notation.
    pub const PERMISSIVE: Self = Self {
        max_depth: Self::MAX_SUPPORTED_DEPTH,
    };

    pub const fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the depth limit, clamped to `MAX_SUPPORTED_DEPTH`.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth > Self::MAX_SUPPORTED_DEPTH {
            Self::MAX_SUPPORTED_DEPTH
        } else {
            max_depth
        };
        self
    }

    /// The limit the parser actually enforces. Covers options built by
    /// setting `max_depth` directly.
    pub const fn depth_limit(&self) -> usize {
        if self.max_depth > Self::MAX_SUPPORTED_DEPTH {
            Self::MAX_SUPPORTED_DEPTH
        } else {
            self.max_depth
        }
    }
}
