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

/// A half-open byte range `[start, end)` into the original notation string.
///
/// Every fragment the parser looks at is a sub-range of the input, so spans
/// are all that is needed to point diagnostics back at what the user wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Span covering the whole of `source`.
    pub fn of(source: &str) -> Self {
        Self::new(0, source.len())
    }

    /// A span covering a single byte at `at`.
    pub fn point(at: usize) -> Self {
        Self::new(at, at + 1)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Sub-span using offsets relative to this span's start.
    pub fn sub(&self, from: usize, to: usize) -> Self {
        Self::new(self.start + from, self.start + to)
    }

    /// Shrinks the span so it no longer covers leading or trailing
    /// whitespace of `source[self]`.
    pub fn trim(&self, source: &str) -> Self {
        let text = &source[self.start..self.end];
        let leading = text.len() - text.trim_start().len();
        let trailing = text.len() - text.trim_end().len();

        if leading == text.len() {
            return Self::new(self.start, self.start);
        }

        Self::new(self.start + leading, self.end - trailing)
    }

    /// Borrows the text this span covers.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
