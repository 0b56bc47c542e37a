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

use crate::error::CommError;
use std::fmt::Write;

/// Responsible for rendering human-friendly, compiler-style diagnostics
/// for notation errors.
///
/// This printer:
/// - Formats errors with their stable code
/// - Displays the notation that was being parsed
/// - Underlines the offending fragment with carets (`^^^`)
/// - Optionally shows a helpful follow-up hint
///
/// Notation is almost always a single line, so unlike a source-file
/// printer there is no line lookup; multi-line input is flattened with
/// newlines shown as spaces so columns still line up.
pub struct DiagnosticPrinter {
    /// The full notation string the error was produced from.
    source: String,
}

impl DiagnosticPrinter {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Renders the diagnostic into a string.
    ///
    /// # Output Example
    /// ```text
    /// error[C0002]: bracketed group "R L" does not contain ',' or ':'
    ///    |
    ///    | [R L]
    ///    |  ^^^
    /// help: write [A, B] for a commutator or [A: B] for a conjugate
    /// ```
    pub fn render(&self, error: &CommError) -> String {
        let span = error.span();
        let line: String = self
            .source
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();

        // Spans are byte offsets, the underline is drawn in characters.
        let start = clamp_to_boundary(&self.source, span.start);
        let end = clamp_to_boundary(&self.source, span.end.max(span.start));
        let column = self.source[..start].chars().count();
        let width = self.source[start..end].chars().count().max(1);

        let mut out = String::new();
        let _ = writeln!(out, "error[{}]: {}", error.code(), error);
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "   | {}", line);
        let _ = writeln!(out, "   | {}{}", " ".repeat(column), "^".repeat(width));

        if let Some(help) = error.help() {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints a formatted error diagnostic to stderr.
    pub fn print(&self, error: &CommError) {
        eprint!("{}", self.render(error));
    }
}

fn clamp_to_boundary(source: &str, mut at: usize) -> usize {
    at = at.min(source.len());
    while !source.is_char_boundary(at) {
        at -= 1;
    }
    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn underline_covers_the_fragment() {
        let printer = DiagnosticPrinter::new("[R L]");
        let err = CommError::MalformedGroup {
            fragment: "R L".to_string(),
            span: Span::new(1, 4),
        };
        let out = printer.render(&err);

        assert!(out.starts_with("error[C0002]:"));
        assert!(out.contains("   | [R L]\n"));
        assert!(out.contains("   |  ^^^\n"));
        assert!(out.contains("help: write [A, B]"));
    }

    #[test]
    fn empty_span_still_gets_a_caret() {
        let printer = DiagnosticPrinter::new("[R, L");
        let err = CommError::UnbalancedBrackets {
            fragment: "[R, L".to_string(),
            span: Span::new(0, 0),
        };
        assert!(printer.render(&err).contains("   | ^\n"));
    }
}
