/*
 * =============================================================================
 *  COMMKIT - Commutator Notation for Twisty Puzzles
 * =============================================================================
 *
 *  Author:   Sam Wilcox
 *
 * -----------------------------------------------------------------------------
 *  License:
 * -----------------------------------------------------------------------------
 *  This file is part of the COMMKIT project.
 *
 *  COMMKIT is dual-licensed under the terms of:
 *    - The MIT License
 *    - The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 * -----------------------------------------------------------------------------
 *  Warranty Disclaimer:
 * -----------------------------------------------------------------------------
 *  Unless required by applicable law or agreed to in writing, this software is
 *  distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 *  either express or implied.
 *
 * =============================================================================
 */

use crate::ast::Expr;

/// ============================================================================
/// tree_to_string
/// ============================================================================
/// Converts an expression tree into an **indented outline**, one node per
/// line. This is used by:
///   - `commkit --tree`
///   - Debug output
///
/// Examples:
///   - `[R, L]` →
///     ```text
///     commutator
///       sequence: R
///       sequence: L
///     ```
///   - `(U M)2` →
///     ```text
///     doubled
///       sequence: U M
///     ```
/// ============================================================================
pub fn tree_to_string(expr: &Expr) -> String {
    let mut out = String::new();
    write_node(expr, 0, &mut out);
    out
}

fn write_node(expr: &Expr, indent: usize, out: &mut String) {
    for _ in 0..indent {
        out.push_str("  ");
    }

    match expr {
        // ------------------------
        // Leaves
        // ------------------------

        Expr::Sequence { tokens } if tokens.is_empty() => {
            out.push_str("sequence: (empty)\n");
        }

        Expr::Sequence { .. } => {
            out.push_str("sequence: ");
            out.push_str(&expr.to_string());
            out.push('\n');
        }

        // ------------------------
        // Groups
        // ------------------------

        Expr::Doubled { inner } => {
            out.push_str("doubled\n");
            write_node(inner, indent + 1, out);
        }

        Expr::Conjugate { setup, nested } => {
            out.push_str("conjugate\n");
            write_node(setup, indent + 1, out);
            write_node(nested, indent + 1, out);
        }

        Expr::Commutator { first, second } => {
            out.push_str("commutator\n");
            write_node(first, indent + 1, out);
            write_node(second, indent + 1, out);
        }
    }
}
