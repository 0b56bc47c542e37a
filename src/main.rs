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

use clap::Parser;
use std::process;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commkit::interpreter::display::tree_to_string;
use commkit::{Comm, DiagnosticPrinter, ParseOptions};

/// Notation expanded when none is given on the command line.
const DEMO: &[&str] = &[
    "",
    "[R, L]",
    "[U' : [S , R' B R]]",
    "[R' : [U' R' U , M]]",
    "[L F' L' , S]",
    "M2' : (U M U M')2",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Expand commutator notation into moves")]
struct Cli {
    /// Notation to expand, e.g. "[R, U]". Runs a built-in demo when empty.
    notation: Vec<String>,

    /// Print the parsed tree instead of the expansion
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Print the parse result and expansion as JSON
    #[arg(long)]
    json: bool,

    /// Deepest nesting accepted before giving up (capped at 256)
    #[arg(long, default_value_t = ParseOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Turn debugging information on (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let options = ParseOptions::new().with_max_depth(cli.max_depth);
    let inputs: Vec<String> = if cli.notation.is_empty() {
        DEMO.iter().map(|s| s.to_string()).collect()
    } else {
        cli.notation.clone()
    };

    let mut failed = false;
    for input in &inputs {
        if let Err(e) = run(input, &cli, &options) {
            DiagnosticPrinter::new(input.as_str()).print(&e);
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

fn run(input: &str, cli: &Cli, options: &ParseOptions) -> commkit::CommResult<()> {
    let comm = Comm::parse_with(input, options)?;

    if cli.tree {
        println!("{}", comm);
        print!("{}", tree_to_string(comm.root()));
        return Ok(());
    }

    let moves = comm.to_moves()?;
    if cli.json {
        let report = serde_json::json!({
            "comm": &comm,
            "moves": &moves,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("failed to serialise '{}': {}", comm, e),
        }
    } else {
        println!("{}", commkit::moves::render(&moves));
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG wins over -d when set
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
