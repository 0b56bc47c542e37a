/*
 * ==========================================================================
 * COMMKIT - Commutator Notation for Twisty Puzzles
 * ==========================================================================
 *
 * File:     moves/mod.rs
 * Purpose:  Root module for single-move tokens and flat move sequences.
 *
 * This module wires together:
 *   - The structured `Move` type
 *   - Layer letter lookup
 *   - Token lexing (`Move::parse`)
 *   - Sequence helpers (parse, invert, render)
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

/// `Move`, `Layer`, `Wide`, `Turns`
pub mod token;

/// Leading letter → layer table
pub mod layers;

/// `Move::parse` / `FromStr`
pub mod lexer;

/// Flat sequence helpers
pub mod sequence;

pub use sequence::{invert, parse_sequence, render};
pub use token::{Layer, Move, Turns, Wide};
