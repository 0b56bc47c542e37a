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

//! Parser and expander for commutator notation.
//!
//! ```text
//! Notation → Parser → Expr tree → flatten → Moves
//! ```
//!
//! `[A, B]` is a commutator (`A B A' B'`), `[A: B]` or `A: B` a conjugate
//! (`A B A'`), and `(X)2` repeats `X` twice. Groups nest freely:
//!
//! ```rust
//! let comm: commkit::Comm = "U' : [S , R' B R]".parse().unwrap();
//! assert_eq!(comm.expand().unwrap(), "U' S R' B R S' R' B' R U");
//! ```

pub mod ast;
pub mod comm;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod moves;
pub mod parser;
pub mod span;

pub use ast::Expr;
pub use comm::Comm;
pub use diagnostics::DiagnosticPrinter;
pub use error::{CommError, CommResult, MoveError};
pub use interpreter::flatten;
pub use moves::Move;
pub use parser::{parse, parse_with, ParseOptions};
pub use span::Span;
