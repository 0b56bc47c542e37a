/*
 * ==========================================================================
 * COMMKIT - Commutator Notation for Twisty Puzzles
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the commutator notation recursive-descent
 *           parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Structural helpers (bracket balance, classification, scanning)
 *   - Parse options
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

/// Core parser orchestration:
/// - Owns the `Parser` struct
/// - Exposes the `parse(source)` / `parse_with(source, options)` entry points
pub mod parser;

/// Shared parser helpers:
/// - bracket balance
/// - sequential / doubled / multiple-group classification
/// - depth-aware separator scanning
pub mod helpers;

/// Parse limits
pub mod options;

/// Re-export the public parse entry points so callers can use:
/// `crate::parser::parse(...)`
pub use options::ParseOptions;
pub use parser::{parse, parse_with, Parser};
