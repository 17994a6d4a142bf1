// SPDX-License-Identifier: BSD-3-Clause
// Copyright 2025. Triad National Security, LLC.

use std::path::PathBuf;

use clap::Parser;

/// Convert a binary test-data file into a C++ header declaring its bytes as
/// a static array, printed to stdout.
#[derive(Parser, Debug)]
struct Args {
    /// Name for the generated array.
    name: String,

    /// File whose bytes get embedded.
    input: PathBuf,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    fixture_codegen::Generator::new(&args.name, &args.input).run()
}
