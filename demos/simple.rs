// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing flags, options with values and leftover
/// arguments.
///
/// Try:
///
/// ```bash
/// $ RUST_LOG=cmdl=debug cargo run --example simple -- -v --output=out.txt -n 3 in.txt
/// ```
use cmdl::{AsgOp, CommandLine, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cl = CommandLine::try_new()?;

    println!("INFO: arguments: {:?}", cl.args());

    // Support "-h" and "--help" flags.
    let help = cl.new_param().parse(&["-h", "--help"]);

    if help.available() {
        println!("usage: simple [-v] [--output=<file>] [-n <count>] [FILE..]");
        return Ok(());
    }

    // Flags may be given more than once.
    let verbose = cl.new_param().parse(&["-v", "--verbose"]);

    // Support "--output=<file>", "--output <file>", "-o <file>", ...
    let asg_op = AsgOp::default().op("=").blank_allowed();
    let output = cl.new_param().parse_pairs(&asg_op, &["-o", "--output"]);

    // Support "-n <count>" and "-n<count>".
    let count_op = AsgOp::default().blank_allowed().empty_allowed();
    let count = cl.new_param().parse_pairs(&count_op, &["-n"]);

    println!("INFO: verbosity: {}", verbose.count());

    // Last one wins.
    if let Some(file) = output.last_value() {
        println!("INFO: output: {:?}", file);
    }

    for (key, value) in count.pairs() {
        println!("INFO: count: {}={:?}", key, value);
    }

    println!("INFO: remaining arguments: {:?}", cl.unparsed_args());

    Ok(())
}
